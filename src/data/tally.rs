use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::leaderboard::LeaderboardEntry;

#[derive(Debug, Clone)]
struct TallyEntry {
    value: u64,
    display_name: String,
}

/// Additive per-user counter shared by the engagement and referral ledgers.
///
/// Values only ever increase. Ranking is by value descending, ties broken by
/// ascending user id so that rendering is deterministic.
#[derive(Clone, Default)]
pub(super) struct Tally {
    entries: Arc<RwLock<HashMap<u64, TallyEntry>>>,
}

impl Tally {
    /// Adds one to the user's value and refreshes their display name.
    ///
    /// # Returns
    /// - `u64` - The new value
    pub async fn increment(&self, user_id: u64, display_name: &str) -> u64 {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(user_id).or_insert_with(|| TallyEntry {
            value: 0,
            display_name: display_name.to_string(),
        });

        entry.value = entry.value.saturating_add(1);
        entry.display_name = display_name.to_string();

        entry.value
    }

    #[cfg(test)]
    pub async fn get(&self, user_id: u64) -> Option<u64> {
        self.entries.read().await.get(&user_id).map(|e| e.value)
    }

    /// Returns at most `n` entries, highest first.
    pub async fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut ranked = self.snapshot().await;
        ranked.truncate(n);
        ranked
    }

    /// Returns every entry, highest first.
    pub async fn snapshot(&self) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<LeaderboardEntry> = self
            .entries
            .read()
            .await
            .iter()
            .map(|(user_id, entry)| LeaderboardEntry {
                user_id: *user_id,
                display_name: entry.display_name.clone(),
                value: entry.value,
            })
            .collect();

        LeaderboardEntry::rank(&mut ranked);
        ranked
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
