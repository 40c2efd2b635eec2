use crate::data::voice::VoiceSessionStore;
use crate::model::voice::VoiceSession;
use chrono::{TimeZone, Utc};


fn session(channel_id: u64, secs: i64) -> VoiceSession {
    VoiceSession {
        channel_id,
        joined_at: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
    }
}
