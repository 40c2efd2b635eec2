use super::*;

/// Tests that the snapshot holds every scored member, not just the top ten.
///
/// Expected: all 12 members, highest score first
#[tokio::test]
async fn returns_every_member_ranked() {
    let ledger = EngagementLedger::new();
    for user_id in 1..=12u64 {
        for _ in 0..user_id {
            ledger
                .record_eligible_message(user_id, &format!("user{user_id}"))
                .await;
        }
    }

    let snapshot = ledger.snapshot().await;

    assert_eq!(snapshot.len(), 12);
    assert_eq!(snapshot[0].user_id, 12);
    assert_eq!(snapshot[0].value, 12);
    assert_eq!(snapshot[11].user_id, 1);
}

/// Tests that taking a snapshot leaves the ledger unchanged.
///
/// Expected: scores identical before and after
#[tokio::test]
async fn snapshot_is_read_only() {
    let ledger = EngagementLedger::new();
    ledger.record_eligible_message(1, "alice").await;

    let first = ledger.snapshot().await;
    let second = ledger.snapshot().await;

    assert_eq!(first, second);
    assert_eq!(ledger.score(1).await, Some(1));
}

/// Tests the snapshot of an empty ledger.
///
/// Expected: no entries
#[tokio::test]
async fn empty_ledger_has_empty_snapshot() {
    assert!(EngagementLedger::new().snapshot().await.is_empty());
}
