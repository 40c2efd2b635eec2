//! Voice session duration tracking.
//!
//! Each (guild, member) pair is either absent from voice or in exactly one channel since
//! a known instant. Gateway voice state updates drive the transitions:
//!
//! | old     | new     | result                                   |
//! |---------|---------|------------------------------------------|
//! | none    | `c`     | joined `c`                               |
//! | `c`     | none    | left `c`                                 |
//! | `c1`    | `c2`    | left `c1`, then joined `c2` (clock reset) |
//! | `c`     | `c`     | nothing (mute, deafen, stream changes)   |
//!
//! Durations are rounded to whole seconds and clamped at zero. A leave or switch with no
//! recorded session (after a restart) reports zero seconds.

use chrono::{DateTime, Utc};

use crate::data::voice::VoiceSessionStore;
use crate::model::voice::{VoiceSession, VoiceTransition};

#[derive(Clone, Default)]
pub struct VoiceTracker {
    sessions: VoiceSessionStore,
}

impl VoiceTracker {
    pub fn new(sessions: VoiceSessionStore) -> Self {
        Self { sessions }
    }

    /// Applies one voice state change.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `old_channel` - Channel before the update, as reported by the gateway
    /// - `new_channel` - Channel after the update
    /// - `now` - Time of the update
    ///
    /// # Returns
    /// - `Vec<VoiceTransition>` - Zero, one or two session boundaries, in order
    pub async fn transition(
        &self,
        guild_id: u64,
        user_id: u64,
        old_channel: Option<u64>,
        new_channel: Option<u64>,
        now: DateTime<Utc>,
    ) -> Vec<VoiceTransition> {
        match (old_channel, new_channel) {
            (None, Some(channel_id)) => {
                let replaced = self
                    .sessions
                    .swap(guild_id, user_id, Some(VoiceSession { channel_id, joined_at: now }))
                    .await;
                if let Some(stale) = replaced {
                    tracing::debug!(
                        "Replaced stale voice session of user {} in channel {}",
                        user_id,
                        stale.channel_id
                    );
                }

                vec![VoiceTransition::Joined {
                    channel_id,
                    joined_at: now,
                }]
            }
            (Some(channel_id), None) => {
                let previous = self.sessions.swap(guild_id, user_id, None).await;
                vec![left(channel_id, previous, now)]
            }
            (Some(old), Some(new)) if old != new => {
                let previous = self
                    .sessions
                    .swap(
                        guild_id,
                        user_id,
                        Some(VoiceSession {
                            channel_id: new,
                            joined_at: now,
                        }),
                    )
                    .await;

                vec![
                    left(old, previous, now),
                    VoiceTransition::Joined {
                        channel_id: new,
                        joined_at: now,
                    },
                ]
            }
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    pub async fn open_session(&self, guild_id: u64, user_id: u64) -> Option<VoiceSession> {
        self.sessions.get(guild_id, user_id).await
    }
}

fn left(channel_id: u64, previous: Option<VoiceSession>, now: DateTime<Utc>) -> VoiceTransition {
    let joined_at = previous.map(|s| s.joined_at).unwrap_or(now);

    VoiceTransition::Left {
        channel_id,
        joined_at,
        left_at: now,
        session_seconds: session_seconds(joined_at, now),
    }
}

/// Whole seconds between join and leave, rounded and never negative.
pub fn session_seconds(joined_at: DateTime<Utc>, left_at: DateTime<Utc>) -> u64 {
    let millis = (left_at - joined_at).num_milliseconds().max(0);
    ((millis + 500) / 1000) as u64
}
