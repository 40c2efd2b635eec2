use serde_json::json;

use super::EventProcessor;
use crate::model::analytics::AnalyticsEvent;
use crate::model::event::ReactionAdded;

impl EventProcessor {
    pub(super) fn on_reaction_added(&self, event: ReactionAdded) {
        if event.user.bot {
            return;
        }

        self.analytics.capture(
            AnalyticsEvent::ReactionAdded,
            event.user.id,
            json!({
                "user_id": event.user.id.to_string(),
                "username": event.user.display_name,
                "emoji_name": event.emoji.name,
                "emoji_id": event.emoji.id.map(|id| id.to_string()),
                "channel_id": event.channel.id.to_string(),
                "channel_name": event.channel.name,
                "message_id": event.message_id.to_string(),
            }),
        );

        tracing::debug!(
            "Reaction {} added by {} in channel {}",
            event.emoji.name.as_deref().unwrap_or("?"),
            event.user.display_name,
            event.channel.id
        );
    }
}
