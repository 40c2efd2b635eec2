use super::*;

/// Tests recording the first scored message of a member.
///
/// Verifies that a member without a score starts at one.
///
/// Expected: new total of 1
#[tokio::test]
async fn first_message_scores_one() {
    let ledger = EngagementLedger::new();

    let total = ledger.record_eligible_message(1, "alice").await;

    assert_eq!(total, 1);
    assert_eq!(ledger.score(1).await, Some(1));
}

/// Tests that each recorded message adds exactly one point.
///
/// Expected: totals 1, 2, 3 in order
#[tokio::test]
async fn increments_by_exactly_one() {
    let ledger = EngagementLedger::new();

    assert_eq!(ledger.record_eligible_message(1, "alice").await, 1);
    assert_eq!(ledger.record_eligible_message(1, "alice").await, 2);
    assert_eq!(ledger.record_eligible_message(1, "alice").await, 3);
    assert_eq!(ledger.len().await, 1);
}

/// Tests that the stored display name follows the latest message.
///
/// Verifies that a renamed member keeps their score and shows the new name.
///
/// Expected: score 2 under the new name
#[tokio::test]
async fn updates_display_name() {
    let ledger = EngagementLedger::new();
    ledger.record_eligible_message(1, "alice").await;
    ledger.record_eligible_message(1, "alice_renamed").await;

    let snapshot = ledger.top_n(usize::MAX).await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].display_name, "alice_renamed");
    assert_eq!(snapshot[0].value, 2);
}

/// Tests that members are scored independently.
///
/// Expected: separate scores per member
#[tokio::test]
async fn scores_members_independently() {
    let ledger = EngagementLedger::new();
    ledger.record_eligible_message(1, "alice").await;
    ledger.record_eligible_message(2, "bob").await;
    ledger.record_eligible_message(2, "bob").await;

    assert_eq!(ledger.score(1).await, Some(1));
    assert_eq!(ledger.score(2).await, Some(2));
    assert_eq!(ledger.score(3).await, None);
}
