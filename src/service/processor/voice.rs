use serde_json::json;

use super::EventProcessor;
use crate::model::analytics::AnalyticsEvent;
use crate::model::event::VoiceStateChanged;
use crate::model::voice::VoiceTransition;

impl EventProcessor {
    /// Drives the voice session tracker and reports each session boundary.
    pub(super) async fn on_voice_state_changed(&self, event: VoiceStateChanged) {
        if event.user.bot {
            return;
        }

        let transitions = self
            .engine
            .voice
            .transition(
                event.guild.id,
                event.user.id,
                event.old_channel.as_ref().map(|c| c.id),
                event.new_channel.as_ref().map(|c| c.id),
                event.changed_at,
            )
            .await;

        for transition in transitions {
            match transition {
                VoiceTransition::Joined {
                    channel_id,
                    joined_at,
                } => {
                    self.analytics.capture(
                        AnalyticsEvent::VoiceJoined,
                        event.user.id,
                        json!({
                            "user_id": event.user.id.to_string(),
                            "username": event.user.display_name,
                            "guild_id": event.guild.id.to_string(),
                            "guild_name": event.guild.name,
                            "channel_id": channel_id.to_string(),
                            "channel_name": channel_name(&event, channel_id),
                            "joined_at": joined_at.to_rfc3339(),
                        }),
                    );

                    tracing::debug!(
                        "{} joined voice channel {}",
                        event.user.display_name,
                        channel_id
                    );
                }
                VoiceTransition::Left {
                    channel_id,
                    joined_at,
                    left_at,
                    session_seconds,
                } => {
                    self.analytics.capture(
                        AnalyticsEvent::VoiceLeft,
                        event.user.id,
                        json!({
                            "user_id": event.user.id.to_string(),
                            "username": event.user.display_name,
                            "guild_id": event.guild.id.to_string(),
                            "guild_name": event.guild.name,
                            "channel_id": channel_id.to_string(),
                            "channel_name": channel_name(&event, channel_id),
                            "joined_at": joined_at.to_rfc3339(),
                            "left_at": left_at.to_rfc3339(),
                            "session_seconds": session_seconds,
                        }),
                    );

                    tracing::debug!(
                        "{} left voice channel {} after {}s",
                        event.user.display_name,
                        channel_id,
                        session_seconds
                    );
                }
            }
        }
    }
}

fn channel_name(event: &VoiceStateChanged, channel_id: u64) -> Option<&str> {
    [&event.old_channel, &event.new_channel]
        .into_iter()
        .flatten()
        .find(|c| c.id == channel_id)
        .and_then(|c| c.name.as_deref())
}
