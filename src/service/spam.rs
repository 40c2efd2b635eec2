//! Anti-spam heuristics for engagement scoring.
//!
//! A message "looks spammy" when it is command-like, too short, an exact repeat of the
//! author's previous message, or sent too soon after it. Only the author's *previous*
//! message is consulted; the store is then overwritten with the current one whatever the
//! verdict, so the next message is compared against this one.

use chrono::{DateTime, Utc};

use crate::data::message_state::{MessageStateStore, UserMessageState};

/// Prefix of text moderation commands such as `!warn`.
pub const MOD_COMMAND_PREFIX: &str = "!";

/// Messages shorter than this many characters (after trimming) are not scored.
const MIN_MESSAGE_LENGTH: usize = 10;

/// Messages sent sooner than this after the previous one are not scored.
const MIN_SECONDS_BETWEEN_MESSAGES: f64 = 10.0;

/// Heuristic verdict for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct SpamVerdict {
    /// Character count of the trimmed content.
    pub trimmed_length: usize,
    pub is_command: bool,
    pub is_short: bool,
    pub is_duplicate: bool,
    pub too_fast: bool,
    /// `None` for the author's first observed message.
    pub seconds_since_last: Option<f64>,
}

impl SpamVerdict {
    pub fn looks_spammy(&self) -> bool {
        self.is_command || self.is_short || self.is_duplicate || self.too_fast
    }

    /// First matching heuristic, in reporting priority order.
    pub fn rejection_reason(&self) -> Option<&'static str> {
        if self.is_command {
            Some("command")
        } else if self.is_short {
            Some("too_short")
        } else if self.is_duplicate {
            Some("duplicate")
        } else if self.too_fast {
            Some("too_fast")
        } else {
            None
        }
    }
}

#[derive(Clone, Default)]
pub struct SpamClassifier {
    state: MessageStateStore,
}

impl SpamClassifier {
    pub fn new(state: MessageStateStore) -> Self {
        Self { state }
    }

    /// Classifies a message and records it as the author's latest.
    ///
    /// # Arguments
    /// - `author_id` - Discord user ID of the author
    /// - `sent_at` - Arrival time of the message
    /// - `content` - Raw message content, trimmed here
    ///
    /// # Returns
    /// - `SpamVerdict` - Verdict computed against the author's previous message only
    pub async fn classify(&self, author_id: u64, sent_at: DateTime<Utc>, content: &str) -> SpamVerdict {
        let trimmed = content.trim();

        let previous = self
            .state
            .replace(
                author_id,
                UserMessageState {
                    last_message_at: sent_at,
                    last_message_content: trimmed.to_string(),
                },
            )
            .await;

        let seconds_since_last = previous
            .as_ref()
            .map(|p| (sent_at - p.last_message_at).num_milliseconds() as f64 / 1000.0);
        let trimmed_length = trimmed.chars().count();

        SpamVerdict {
            trimmed_length,
            is_command: trimmed.starts_with('/') || trimmed.starts_with(MOD_COMMAND_PREFIX),
            is_short: trimmed_length < MIN_MESSAGE_LENGTH,
            is_duplicate: previous
                .as_ref()
                .is_some_and(|p| p.last_message_content == trimmed),
            too_fast: seconds_since_last.is_some_and(|s| s < MIN_SECONDS_BETWEEN_MESSAGES),
            seconds_since_last,
        }
    }
}
