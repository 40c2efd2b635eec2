use crate::data::tally::Tally;
use crate::model::leaderboard::LeaderboardEntry;

/// Referral count per inviter: one per attributed, non-excluded join.
#[derive(Clone, Default)]
pub struct ReferralLedger {
    counts: Tally,
}

impl ReferralLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits one referral to an inviter.
    ///
    /// # Returns
    /// - `u64` - The inviter's new referral count
    pub async fn record_referral(&self, inviter_id: u64, display_name: &str) -> u64 {
        self.counts.increment(inviter_id, display_name).await
    }

    #[cfg(test)]
    pub async fn count(&self, inviter_id: u64) -> Option<u64> {
        self.counts.get(inviter_id).await
    }

    pub async fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.counts.top_n(n).await
    }

    pub async fn snapshot(&self) -> Vec<LeaderboardEntry> {
        self.counts.snapshot().await
    }
}
