use serde_json::json;

use super::EventProcessor;
use crate::model::analytics::AnalyticsEvent;
use crate::model::event::{MemberBanned, MemberJoined, MemberLeft};
use crate::model::invite::InviteUsage;
use crate::model::member::UserInfo;
use crate::service::gateway::Gateway;

impl EventProcessor {
    /// Reports a join and attributes it to an invite.
    ///
    /// The previous invite snapshot is read before the invite list is fetched. See
    /// [`crate::service::referral`] for the race this implies.
    pub(super) async fn on_member_joined(&self, event: MemberJoined, gateway: &dyn Gateway) {
        let user = &event.user;

        self.analytics.capture(
            AnalyticsEvent::UserJoined,
            user.id,
            json!({
                "user_id": user.id.to_string(),
                "username": user.display_name,
                "joined_at": event.joined_at.to_rfc3339(),
            }),
        );

        tracing::info!("User joined: {}", user.display_name);

        let guild_id = event.guild.id;
        let previous = self.engine.referrals.previous_snapshot(guild_id).await;

        let fresh = match gateway.fetch_invites(guild_id).await {
            Ok(invites) => invites,
            Err(e) => {
                tracing::error!(
                    "Failed to fetch invites after {} joined guild {}: {}",
                    user.display_name,
                    guild_id,
                    e
                );
                return;
            }
        };

        let Some(attribution) = self
            .engine
            .referrals
            .attribute_join(guild_id, &previous, fresh)
            .await
        else {
            tracing::info!("{} joined but no invite diff detected", user.display_name);
            return;
        };

        if attribution.candidates > 1 {
            tracing::warn!(
                "Ambiguous referral for {}: {} invites increased, crediting {}",
                user.display_name,
                attribution.candidates,
                attribution.invite.code
            );
        }

        let invite = attribution.invite;
        let Some(inviter) = invite.inviter.clone() else {
            tracing::info!(
                "{} joined via invite {} which has no inviter",
                user.display_name,
                invite.code
            );
            return;
        };

        self.analytics.capture(
            AnalyticsEvent::ReferralJoin,
            inviter.id,
            json!({
                "inviter_id": inviter.id.to_string(),
                "inviter_username": inviter.display_name,
                "invited_user_id": user.id.to_string(),
                "invited_username": user.display_name,
                "invite_code": invite.code,
                "guild_id": guild_id.to_string(),
                "guild_name": event.guild.name,
                "uses_after_join": invite.uses,
            }),
        );

        tracing::info!(
            "Referral: {} joined via invite {} from {}",
            user.display_name,
            invite.code,
            inviter.display_name
        );

        self.credit_referral(guild_id, &inviter, &invite, gateway)
            .await;
    }

    /// Counts a referral unless the inviter is excluded from scoring.
    ///
    /// An inviter who can no longer be resolved as a member is judged on the checks that
    /// need no member profile.
    async fn credit_referral(
        &self,
        guild_id: u64,
        inviter: &UserInfo,
        invite: &InviteUsage,
        gateway: &dyn Gateway,
    ) {
        let exclusion = &self.engine.exclusion;

        let excluded = match gateway.fetch_member(guild_id, inviter.id).await {
            Ok(Some(member)) => {
                tracing::trace!("Resolved inviter {} as member", member.display_name);
                exclusion.is_excluded(Some(&member))
            }
            Ok(None) => exclusion.is_user_excluded(inviter),
            Err(e) => {
                tracing::debug!("Failed to fetch inviter {}: {}", inviter.id, e);
                exclusion.is_user_excluded(inviter)
            }
        };

        if excluded {
            tracing::info!(
                "Referral via {} not counted: inviter {} excluded_staff_or_bot",
                invite.code,
                inviter.display_name
            );
            return;
        }

        let total = self
            .engine
            .referrals
            .credit_inviter(inviter.id, &inviter.display_name)
            .await;

        tracing::debug!("{} now has {} referrals", inviter.display_name, total);
    }

    pub(super) fn on_member_left(&self, event: MemberLeft) {
        self.analytics.capture(
            AnalyticsEvent::UserLeft,
            event.user.id,
            json!({
                "user_id": event.user.id.to_string(),
                "username": event.user.display_name,
                "left_at": event.left_at.to_rfc3339(),
            }),
        );

        tracing::info!("User left: {}", event.user.display_name);
    }

    pub(super) fn on_member_banned(&self, event: MemberBanned) {
        self.analytics.capture(
            AnalyticsEvent::UserBanned,
            event.user.id,
            json!({
                "user_id": event.user.id.to_string(),
                "username": event.user.display_name,
                "guild_id": event.guild.id.to_string(),
                "guild_name": event.guild.name,
                "banned_at": event.banned_at.to_rfc3339(),
            }),
        );

        tracing::info!(
            "User banned: {} in guild {}",
            event.user.display_name,
            event.guild.id
        );
    }
}
