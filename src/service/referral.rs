//! Referral attribution from invite usage diffs.
//!
//! Discord does not say which invite a new member used. The tracker keeps the last known
//! use count of every invite per guild and, on each join, compares a freshly fetched
//! invite list against it: a code whose count went up is assumed to be the one used.
//!
//! Attribution is inherently racy. The previous snapshot is read before the invite fetch
//! and the diff is applied after it, so two joins close together in one guild can both
//! see, or both miss, the same increase.

use crate::data::invite::{InviteCounts, InviteSnapshotStore};
use crate::data::referral::ReferralLedger;
use crate::model::invite::{InviteUsage, ReferralAttribution};
use crate::model::leaderboard::LeaderboardEntry;

#[derive(Clone, Default)]
pub struct ReferralTracker {
    invites: InviteSnapshotStore,
    referrals: ReferralLedger,
}

impl ReferralTracker {
    pub fn new(invites: InviteSnapshotStore, referrals: ReferralLedger) -> Self {
        Self { invites, referrals }
    }

    /// Installs the startup snapshot for a guild.
    pub async fn load_snapshot(&self, guild_id: u64, invites: &[InviteUsage]) {
        self.invites.replace(guild_id, invites).await;
    }

    /// Returns the snapshot a join should be diffed against.
    ///
    /// Must be read before fetching the fresh invite list.
    pub async fn previous_snapshot(&self, guild_id: u64) -> InviteCounts {
        self.invites.get(guild_id).await
    }

    /// Infers which invite a new member used and refreshes the guild snapshot.
    ///
    /// Every code whose fetched count is strictly greater than its previous count (zero if
    /// unknown) is a candidate. Only the last candidate in fetch order is credited. The
    /// snapshot is replaced with the fetched counts whether or not a candidate was found.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `previous` - Snapshot read before the fetch
    /// - `fresh` - Invite list fetched after the join
    ///
    /// # Returns
    /// - `Some(ReferralAttribution)` - The credited invite and how many codes changed
    /// - `None` - No invite count increased
    pub async fn attribute_join(
        &self,
        guild_id: u64,
        previous: &InviteCounts,
        fresh: Vec<InviteUsage>,
    ) -> Option<ReferralAttribution> {
        self.invites.replace(guild_id, &fresh).await;

        let mut candidates = fresh
            .into_iter()
            .filter(|invite| invite.uses > previous.get(&invite.code).copied().unwrap_or(0));

        let mut credited = candidates.next()?;
        let mut count = 1;
        for invite in candidates {
            credited = invite;
            count += 1;
        }

        Some(ReferralAttribution {
            invite: credited,
            candidates: count,
        })
    }

    /// Records a newly created invite so the next diff accounts for it.
    pub async fn record_invite_created(&self, guild_id: u64, code: &str, uses: u64) {
        self.invites.upsert(guild_id, code, uses).await;
    }

    /// Credits an attributed join to an inviter who passed the exclusion policy.
    ///
    /// # Returns
    /// - `u64` - The inviter's new referral count
    pub async fn credit_inviter(&self, inviter_id: u64, display_name: &str) -> u64 {
        self.referrals.record_referral(inviter_id, display_name).await
    }

    #[cfg(test)]
    pub async fn referral_count(&self, inviter_id: u64) -> Option<u64> {
        self.referrals.count(inviter_id).await
    }

    /// Returns at most `n` inviters ranked by referral count.
    pub async fn top_referrers(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.referrals.top_n(n).await
    }

    /// Returns every inviter with at least one referral.
    pub async fn referral_snapshot(&self) -> Vec<LeaderboardEntry> {
        self.referrals.snapshot().await
    }
}
