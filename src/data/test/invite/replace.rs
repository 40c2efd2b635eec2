use super::*;

/// Tests reading a guild that was never loaded.
///
/// Expected: empty snapshot
#[tokio::test]
async fn unknown_guild_is_empty() {
    let store = InviteSnapshotStore::new();

    assert!(store.get(1).await.is_empty());
}

/// Tests loading a snapshot.
///
/// Expected: every fetched code stored with its count
#[tokio::test]
async fn stores_fetched_counts() {
    let store = InviteSnapshotStore::new();

    store.replace(1, &[usage("abc", 3), usage("xyz", 0)]).await;

    let snapshot = store.get(1).await;
    assert_eq!(snapshot.get("abc"), Some(&3));
    assert_eq!(snapshot.get("xyz"), Some(&0));
}

/// Tests that codes missing from a fresh fetch are dropped.
///
/// Verifies that deleted or expired invites leave the snapshot.
///
/// Expected: only the fetched code remains
#[tokio::test]
async fn drops_codes_missing_from_fetch() {
    let store = InviteSnapshotStore::new();
    store.replace(1, &[usage("abc", 3), usage("old", 9)]).await;

    store.replace(1, &[usage("abc", 4)]).await;

    let snapshot = store.get(1).await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("abc"), Some(&4));
}

/// Tests that an apparent decrease is treated as a stale read.
///
/// Expected: the higher stored count is kept
#[tokio::test]
async fn keeps_higher_count_on_decrease() {
    let store = InviteSnapshotStore::new();
    store.replace(1, &[usage("abc", 5)]).await;

    store.replace(1, &[usage("abc", 2)]).await;

    assert_eq!(store.get(1).await.get("abc"), Some(&5));
}

/// Tests that guilds are tracked independently.
///
/// Expected: replacing one guild leaves the other untouched
#[tokio::test]
async fn guilds_are_independent() {
    let store = InviteSnapshotStore::new();
    store.replace(1, &[usage("abc", 1)]).await;
    store.replace(2, &[usage("def", 7)]).await;

    store.replace(1, &[]).await;

    assert!(store.get(1).await.is_empty());
    assert_eq!(store.get(2).await.get("def"), Some(&7));
}
