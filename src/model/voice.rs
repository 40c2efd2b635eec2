use chrono::{DateTime, Utc};

/// Open voice session of one member in one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSession {
    pub channel_id: u64,
    pub joined_at: DateTime<Utc>,
}

/// Session boundary produced by a voice state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Joined {
        channel_id: u64,
        joined_at: DateTime<Utc>,
    },
    Left {
        channel_id: u64,
        joined_at: DateTime<Utc>,
        left_at: DateTime<Utc>,
        session_seconds: u64,
    },
}
