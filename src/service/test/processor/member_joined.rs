use super::*;
use crate::model::event::MemberJoined;

const INVITER: u64 = 100;
const NEWCOMER: u64 = 200;

fn joined() -> CommunityEvent {
    CommunityEvent::MemberJoined(MemberJoined {
        guild: guild(),
        user: user(NEWCOMER, "newcomer"),
        joined_at: at(0),
    })
}

/// Loads the startup snapshot through the processor, as the ready handler does.
async fn preload(harness: &Harness, gateway: &FakeGateway, invites: Vec<InviteUsage>) {
    gateway.set_invites(invites);
    harness.processor.preload_invites(&[GUILD], gateway).await;
}

/// Tests a join through an invite whose count went from 3 to 4.
///
/// Expected: user_joined, referral_join, inviter credited once
#[tokio::test]
async fn credits_inviter() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default().with_member(member(INVITER, Permissions::SEND_MESSAGES));
    let inviter = Some(user(INVITER, "inviter"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter.clone())]).await;

    gateway.set_invites(vec![invite("abc", 4, inviter)]);
    harness.process(joined(), &gateway).await;

    let records = harness.drain();
    let events: Vec<AnalyticsEvent> = records.iter().map(|r| r.event).collect();
    assert_eq!(
        events,
        vec![AnalyticsEvent::UserJoined, AnalyticsEvent::ReferralJoin]
    );
    assert_eq!(records[1].distinct_id, INVITER.to_string());
    assert_eq!(records[1].property("invite_code"), Some(&"abc".into()));
    assert_eq!(records[1].property("uses_after_join"), Some(&4.into()));
    assert_eq!(records[1].property("invited_user_id"), Some(&"200".into()));
    assert_eq!(
        harness.engine.referrals.referral_count(INVITER).await,
        Some(1)
    );
}

/// Tests a join through an invite created by a bot.
///
/// Expected: referral_join still emitted, referral not counted
#[tokio::test]
async fn bot_inviter_not_counted() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();
    let inviter = Some(bot(INVITER, "invite-bot"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter.clone())]).await;

    gateway.set_invites(vec![invite("abc", 4, inviter)]);
    harness.process(joined(), &gateway).await;

    assert!(harness.drain_events().contains(&AnalyticsEvent::ReferralJoin));
    assert_eq!(harness.engine.referrals.referral_count(INVITER).await, None);
}

/// Tests a join through an invite created by an administrator.
///
/// Expected: referral_join emitted, referral not counted
#[tokio::test]
async fn staff_inviter_not_counted() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default().with_member(member(INVITER, Permissions::ADMINISTRATOR));
    let inviter = Some(user(INVITER, "admin"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter.clone())]).await;

    gateway.set_invites(vec![invite("abc", 4, inviter)]);
    harness.process(joined(), &gateway).await;

    assert!(harness.drain_events().contains(&AnalyticsEvent::ReferralJoin));
    assert_eq!(harness.engine.referrals.referral_count(INVITER).await, None);
}

/// Tests an inviter who has left the guild but is on the excluded user list.
///
/// Expected: not counted
#[tokio::test]
async fn departed_excluded_inviter_not_counted() {
    let mut harness = Harness::with_policy(ExclusionPolicy::new(
        Default::default(),
        [INVITER].into_iter().collect(),
    ));
    let gateway = FakeGateway::default();
    let inviter = Some(user(INVITER, "former-staff"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter.clone())]).await;

    gateway.set_invites(vec![invite("abc", 4, inviter)]);
    harness.process(joined(), &gateway).await;

    harness.drain();
    assert_eq!(harness.engine.referrals.referral_count(INVITER).await, None);
}

/// Tests an inviter who has left the guild and is not excluded.
///
/// Expected: counted
#[tokio::test]
async fn departed_inviter_counted() {
    let harness = Harness::new();
    let gateway = FakeGateway::default();
    let inviter = Some(user(INVITER, "inviter"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter.clone())]).await;

    gateway.set_invites(vec![invite("abc", 4, inviter)]);
    harness.process(joined(), &gateway).await;

    assert_eq!(harness.engine.referrals.referral_count(INVITER).await, Some(1));
}

/// Tests a join when the invite list cannot be fetched.
///
/// Expected: only user_joined, snapshot untouched
#[tokio::test]
async fn invite_fetch_failure_skips_attribution() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default().without_invites();

    harness.process(joined(), &gateway).await;

    assert_eq!(harness.drain_events(), vec![AnalyticsEvent::UserJoined]);
    assert!(harness
        .engine
        .referrals
        .previous_snapshot(GUILD)
        .await
        .is_empty());
}

/// Tests a join with no invite count change, e.g. through a vanity URL.
///
/// Expected: only user_joined
#[tokio::test]
async fn no_diff_no_referral() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();
    let inviter = Some(user(INVITER, "inviter"));
    preload(&harness, &gateway, vec![invite("abc", 3, inviter)]).await;

    harness.process(joined(), &gateway).await;

    assert_eq!(harness.drain_events(), vec![AnalyticsEvent::UserJoined]);
}

/// Tests a credited invite without an inviter (e.g. a widget invite).
///
/// Expected: snapshot refreshed, no referral_join
#[tokio::test]
async fn inviterless_invite_not_reported() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();
    preload(&harness, &gateway, vec![invite("widget", 1, None)]).await;

    gateway.set_invites(vec![invite("widget", 2, None)]);
    harness.process(joined(), &gateway).await;

    assert_eq!(harness.drain_events(), vec![AnalyticsEvent::UserJoined]);
    assert_eq!(
        harness
            .engine
            .referrals
            .previous_snapshot(GUILD)
            .await
            .get("widget"),
        Some(&2)
    );
}
