use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;

/// Maximum number of authors whose last message is remembered.
const MESSAGE_STATE_CAPACITY: u64 = 50_000;

/// Authors silent for longer than this are forgotten.
const MESSAGE_STATE_IDLE: Duration = Duration::from_secs(24 * 60 * 60);

/// Last message seen from an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessageState {
    pub last_message_at: DateTime<Utc>,
    /// Trimmed content of the last message.
    pub last_message_content: String,
}

/// Bounded store of each author's previous message, used by the anti-spam classifier.
///
/// Eviction only loses duplicate/too-fast history for long-idle or least-valued authors;
/// their next message is then classified as if it were their first.
#[derive(Clone)]
pub struct MessageStateStore {
    cache: Cache<u64, UserMessageState>,
}

impl MessageStateStore {
    pub fn new() -> Self {
        Self::with_capacity(MESSAGE_STATE_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(MESSAGE_STATE_IDLE)
            .build();

        Self { cache }
    }

    /// Stores the author's latest message and returns the one it replaces.
    ///
    /// The read and the write happen under the cache's per-key lock, so concurrent
    /// messages from one author each see a distinct predecessor.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the author
    /// - `state` - The message just received
    ///
    /// # Returns
    /// - `Some(UserMessageState)` - The author's previous message
    /// - `None` - First observed message (or the previous one was evicted)
    pub async fn replace(&self, user_id: u64, state: UserMessageState) -> Option<UserMessageState> {
        let mut previous = None;

        self.cache
            .entry(user_id)
            .and_upsert_with(|existing| {
                previous = existing.map(|entry| entry.into_value());
                std::future::ready(state)
            })
            .await;

        previous
    }

    #[cfg(test)]
    pub async fn get(&self, user_id: u64) -> Option<UserMessageState> {
        self.cache.get(&user_id).await
    }
}

impl Default for MessageStateStore {
    fn default() -> Self {
        Self::new()
    }
}
