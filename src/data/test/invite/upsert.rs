use super::*;

/// Tests adding a newly created invite.
///
/// Expected: code stored even though the guild had no snapshot yet
#[tokio::test]
async fn inserts_new_code() {
    let store = InviteSnapshotStore::new();

    store.upsert(1, "new", 0).await;

    assert_eq!(store.get(1).await.get("new"), Some(&0));
}

/// Tests that upsert keeps existing codes.
///
/// Expected: both the loaded and the new code present
#[tokio::test]
async fn preserves_other_codes() {
    let store = InviteSnapshotStore::new();
    store.replace(1, &[usage("abc", 3)]).await;

    store.upsert(1, "new", 0).await;

    let snapshot = store.get(1).await;
    assert_eq!(snapshot.get("abc"), Some(&3));
    assert_eq!(snapshot.get("new"), Some(&0));
}

/// Tests that upsert never lowers a count.
///
/// Expected: stored count stays at 4
#[tokio::test]
async fn never_lowers_count() {
    let store = InviteSnapshotStore::new();
    store.upsert(1, "abc", 4).await;

    store.upsert(1, "abc", 1).await;

    assert_eq!(store.get(1).await.get("abc"), Some(&4));
}
