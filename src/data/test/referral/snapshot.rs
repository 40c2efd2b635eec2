use super::*;

/// Tests that every inviter appears in the snapshot with equal counts ordered by id.
///
/// Expected: [2, 3, 1] for counts {1: 1, 2: 2, 3: 2}
#[tokio::test]
async fn ties_ordered_by_inviter_id() {
    let ledger = ReferralLedger::new();
    ledger.record_referral(3, "carol").await;
    ledger.record_referral(1, "alice").await;
    ledger.record_referral(3, "carol").await;
    ledger.record_referral(2, "bob").await;
    ledger.record_referral(2, "bob").await;

    let ids: Vec<u64> = ledger.snapshot().await.iter().map(|e| e.user_id).collect();

    assert_eq!(ids, vec![2, 3, 1]);
}
