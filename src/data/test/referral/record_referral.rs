use super::*;

/// Tests crediting referrals to inviters.
///
/// Expected: counts accumulate per inviter
#[tokio::test]
async fn accumulates_per_inviter() {
    let ledger = ReferralLedger::new();

    assert_eq!(ledger.record_referral(1, "alice").await, 1);
    assert_eq!(ledger.record_referral(1, "alice").await, 2);
    assert_eq!(ledger.record_referral(2, "bob").await, 1);

    assert_eq!(ledger.count(1).await, Some(2));
    assert_eq!(ledger.count(2).await, Some(1));
}

/// Tests referral ranking.
///
/// Expected: highest count first
#[tokio::test]
async fn ranks_inviters_by_count() {
    let ledger = ReferralLedger::new();
    ledger.record_referral(1, "alice").await;
    ledger.record_referral(2, "bob").await;
    ledger.record_referral(2, "bob").await;

    let top = ledger.top_n(10).await;

    assert_eq!(top[0].user_id, 2);
    assert_eq!(top[0].value, 2);
    assert_eq!(top[1].user_id, 1);
}
