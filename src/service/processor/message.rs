use serde_json::{json, Value};
use serenity::all::Permissions;

use super::{extend, EventProcessor};
use crate::model::analytics::AnalyticsEvent;
use crate::model::event::{MessageCreated, MessageDeleted};
use crate::model::member::MemberProfile;
use crate::service::gateway::Gateway;
use crate::service::moderation;
use crate::service::spam::SpamVerdict;

impl EventProcessor {
    /// Classifies, reports and possibly scores a guild message.
    ///
    /// Bot authors are ignored entirely. Every other message emits `message_sent`;
    /// only messages that are neither spammy nor from an excluded member are scored.
    pub(super) async fn on_message_created(&self, event: MessageCreated, gateway: &dyn Gateway) {
        if event.author.bot {
            return;
        }

        tracing::debug!(
            "Message from {} in guild {} channel {}",
            event.author.display_name,
            event.guild.id,
            event.channel.name.as_deref().unwrap_or("unknown")
        );

        let member = match gateway.fetch_member(event.guild.id, event.author.id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch member {} in guild {}: {}",
                    event.author.id,
                    event.guild.id,
                    e
                );
                None
            }
        };

        let excluded = self.engine.exclusion.is_excluded(member.as_ref());
        let verdict = self
            .engine
            .spam
            .classify(event.author.id, event.sent_at, &event.content)
            .await;

        let base = message_properties(&event, &verdict, excluded);

        self.analytics
            .capture(AnalyticsEvent::MessageSent, event.author.id, base.clone());

        if !verdict.looks_spammy() && !excluded {
            self.analytics.capture(
                AnalyticsEvent::MessageScored,
                event.author.id,
                extend(base.clone(), json!({ "is_scored": true, "score_value": 1 })),
            );

            let total = self
                .engine
                .engagement
                .record_eligible_message(event.author.id, &event.author.display_name)
                .await;

            tracing::info!(
                "Scored message from {} (total {})",
                event.author.display_name,
                total
            );
        } else {
            let reason = if excluded {
                "excluded_staff_or_bot"
            } else {
                verdict.rejection_reason().unwrap_or("unknown")
            };

            tracing::debug!(
                "Message from {} not scored: {}",
                event.author.display_name,
                reason
            );
        }

        if event.channel.name.as_deref() == Some(self.announcements_channel.as_str()) {
            self.analytics
                .capture(AnalyticsEvent::MessageInAnnouncements, event.author.id, base);
        }

        if moderation::is_warn_command(&event.content) && can_moderate(member.as_ref()) {
            self.issue_warning(&event, gateway).await;
        }
    }

    /// Handles `!warn @user reason...` from a moderator.
    async fn issue_warning(&self, event: &MessageCreated, gateway: &dyn Gateway) {
        let Some(warned) = event.mentions.first() else {
            if let Err(e) = gateway
                .reply(event.channel.id, event.message_id, moderation::WARN_USAGE)
                .await
            {
                tracing::warn!("Failed to send warn usage reply: {}", e);
            }
            return;
        };

        let reason = moderation::warn_reason(&event.content);

        self.analytics.capture(
            AnalyticsEvent::WarningIssued,
            warned.id,
            json!({
                "warned_user_id": warned.id.to_string(),
                "warned_username": warned.display_name,
                "moderator_id": event.author.id.to_string(),
                "moderator_username": event.author.display_name,
                "channel_id": event.channel.id.to_string(),
                "channel_name": event.channel.name,
                "reason": reason,
            }),
        );

        let confirmation = moderation::warn_confirmation(warned.id, &reason);
        if let Err(e) = gateway
            .reply(event.channel.id, event.message_id, &confirmation)
            .await
        {
            tracing::warn!("Failed to confirm warning for {}: {}", warned.id, e);
        }

        tracing::info!(
            "Warning issued to {} by {}: {}",
            warned.display_name,
            event.author.display_name,
            reason
        );
    }

    pub(super) fn on_message_deleted(&self, event: MessageDeleted) {
        if event.author.as_ref().is_some_and(|a| a.bot) {
            return;
        }

        let (user_id, username) = match &event.author {
            Some(author) => (author.id.to_string(), author.display_name.clone()),
            None => ("unknown".to_string(), "unknown".to_string()),
        };

        self.analytics.capture(
            AnalyticsEvent::MessageDeleted,
            &user_id,
            json!({
                "user_id": user_id,
                "username": username,
                "channel_id": event.channel.id.to_string(),
                "channel_name": event.channel.name,
                "message_id": event.message_id.to_string(),
                "deleted_at": event.deleted_at.to_rfc3339(),
            }),
        );

        tracing::debug!(
            "Message {} deleted in channel {} (author: {})",
            event.message_id,
            event.channel.id,
            username
        );
    }
}

fn can_moderate(member: Option<&MemberProfile>) -> bool {
    member.is_some_and(|m| m.permissions.contains(Permissions::MODERATE_MEMBERS))
}

/// Properties shared by every record derived from a created message.
fn message_properties(event: &MessageCreated, verdict: &SpamVerdict, excluded: bool) -> Value {
    json!({
        "user_id": event.author.id.to_string(),
        "username": event.author.display_name,
        "channel_id": event.channel.id.to_string(),
        "channel_name": event.channel.name,
        "message_id": event.message_id.to_string(),
        "message_length": verdict.trimmed_length,
        "is_command": verdict.is_command,
        "time_since_last_message_sec": verdict.seconds_since_last,
        "is_duplicate_message": verdict.is_duplicate,
        "is_short_message": verdict.is_short,
        "looks_spammy": verdict.looks_spammy(),
        "excluded_from_scoring": excluded,
    })
}
