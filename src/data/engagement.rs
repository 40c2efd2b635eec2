use crate::data::tally::Tally;
use crate::model::leaderboard::LeaderboardEntry;

/// Engagement score per member: one point per scored message.
///
/// Callers are responsible for only recording messages from non-excluded members that
/// passed the anti-spam classifier. Scores are never decayed, capped or removed.
#[derive(Clone, Default)]
pub struct EngagementLedger {
    scores: Tally,
}

impl EngagementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scored message for a member.
    ///
    /// Increments the member's score by exactly one and stores the latest display name.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the author
    /// - `display_name` - Author tag at the time of the message
    ///
    /// # Returns
    /// - `u64` - The member's new total
    pub async fn record_eligible_message(&self, user_id: u64, display_name: &str) -> u64 {
        self.scores.increment(user_id, display_name).await
    }

    #[cfg(test)]
    pub async fn score(&self, user_id: u64) -> Option<u64> {
        self.scores.get(user_id).await
    }

    /// Returns at most `n` members ranked by score, ties broken by ascending user id.
    pub async fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.scores.top_n(n).await
    }

    /// Returns every member with a score, ranked like [`Self::top_n`].
    pub async fn snapshot(&self) -> Vec<LeaderboardEntry> {
        self.scores.snapshot().await
    }

    pub async fn len(&self) -> usize {
        self.scores.len().await
    }
}
