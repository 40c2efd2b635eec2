use crate::data::message_state::{MessageStateStore, UserMessageState};
use chrono::{TimeZone, Utc};


fn state(secs: i64, content: &str) -> UserMessageState {
    UserMessageState {
        last_message_at: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        last_message_content: content.to_string(),
    }
}
