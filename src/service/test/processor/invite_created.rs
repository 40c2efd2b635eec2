use super::*;
use crate::model::event::InviteCreated;

fn created(code: &str, inviter: Option<UserInfo>) -> CommunityEvent {
    CommunityEvent::InviteCreated(InviteCreated {
        guild: guild(),
        code: code.to_string(),
        uses: 0,
        inviter,
        max_uses: 25,
        temporary: false,
    })
}

/// Tests an invite created by a member.
///
/// Expected: referral_invite_created record and the code added to the snapshot
#[tokio::test]
async fn records_invite_with_inviter() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness
        .process(created("summer", Some(user(100, "inviter"))), &gateway)
        .await;

    let records = harness.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event, AnalyticsEvent::ReferralInviteCreated);
    assert_eq!(records[0].property("max_uses"), Some(&25.into()));
    assert_eq!(records[0].property("temporary"), Some(&false.into()));
    assert_eq!(
        harness
            .engine
            .referrals
            .previous_snapshot(GUILD)
            .await
            .get("summer"),
        Some(&0)
    );
}

/// Tests an invite with no known inviter.
///
/// Expected: no record, snapshot still updated
#[tokio::test]
async fn inviterless_invite_updates_snapshot_only() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness.process(created("anon", None), &gateway).await;

    assert!(harness.drain().is_empty());
    assert!(harness
        .engine
        .referrals
        .previous_snapshot(GUILD)
        .await
        .contains_key("anon"));
}
