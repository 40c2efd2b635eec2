//! The scoring engine: single owner of all ledgers and snapshots.

use crate::data::{
    engagement::EngagementLedger, invite::InviteSnapshotStore, message_state::MessageStateStore,
    referral::ReferralLedger, voice::VoiceSessionStore,
};
use crate::service::{
    exclusion::ExclusionPolicy,
    leaderboard::render::render,
    referral::ReferralTracker,
    spam::SpamClassifier,
    voice::VoiceTracker,
};

/// All scoring state of the bot.
///
/// Constructed once at startup and shared behind an `Arc` by the event processor and the
/// leaderboard publisher. State lives only in memory and is lost on restart.
pub struct ScoringEngine {
    pub exclusion: ExclusionPolicy,
    pub spam: SpamClassifier,
    pub engagement: EngagementLedger,
    pub referrals: ReferralTracker,
    pub voice: VoiceTracker,
}

impl ScoringEngine {
    pub fn new(exclusion: ExclusionPolicy) -> Self {
        Self {
            exclusion,
            spam: SpamClassifier::new(MessageStateStore::new()),
            engagement: EngagementLedger::new(),
            referrals: ReferralTracker::new(InviteSnapshotStore::new(), ReferralLedger::new()),
            voice: VoiceTracker::new(VoiceSessionStore::new()),
        }
    }

    /// Renders snapshots of both ledgers without mutating them.
    pub async fn render_leaderboard(&self) -> String {
        let engagement = self.engagement.snapshot().await;
        let referrals = self.referrals.referral_snapshot().await;

        render(&engagement, &referrals)
    }

    /// Logs the current leader of each ledger.
    pub async fn log_leaders(&self) {
        if let Some(leader) = self.engagement.top_n(1).await.first() {
            tracing::debug!(
                "Engagement leader: {} ({} pts)",
                leader.display_name,
                leader.value
            );
        }
        if let Some(leader) = self.referrals.top_referrers(1).await.first() {
            tracing::debug!(
                "Referral leader: {} ({} joins)",
                leader.display_name,
                leader.value
            );
        }
    }
}
