use serde_json::json;

use super::EventProcessor;
use crate::model::analytics::AnalyticsEvent;
use crate::model::event::InviteCreated;

impl EventProcessor {
    /// Adds a new invite to the guild baseline so a later join through it is detected.
    pub(super) async fn on_invite_created(&self, event: InviteCreated) {
        self.engine
            .referrals
            .record_invite_created(event.guild.id, &event.code, event.uses)
            .await;

        if let Some(inviter) = &event.inviter {
            self.analytics.capture(
                AnalyticsEvent::ReferralInviteCreated,
                inviter.id,
                json!({
                    "invite_code": event.code,
                    "inviter_id": inviter.id.to_string(),
                    "inviter_username": inviter.display_name,
                    "guild_id": event.guild.id.to_string(),
                    "guild_name": event.guild.name,
                    "max_uses": event.max_uses,
                    "temporary": event.temporary,
                }),
            );
        }

        tracing::info!(
            "Invite {} created in guild {} by {}",
            event.code,
            event.guild.id,
            event
                .inviter
                .as_ref()
                .map_or("unknown", |i| i.display_name.as_str())
        );
    }
}
