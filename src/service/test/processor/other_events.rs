use super::*;
use crate::model::event::{
    EmojiInfo, MemberBanned, MemberLeft, MessageDeleted, ReactionAdded,
};

/// Tests that events from other guilds are dropped when a scope is configured.
///
/// Expected: no records, no score
#[tokio::test]
async fn untracked_guild_ignored() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();
    let mut event = message(&user(5, "alice"), "a perfectly normal message", 0);
    event.guild.id = OTHER_GUILD;

    harness
        .process(CommunityEvent::MessageCreated(event), &gateway)
        .await;

    assert!(harness.drain().is_empty());
    assert_eq!(harness.engine.engagement.score(5).await, None);
}

/// Tests the startup invite preload.
///
/// Verifies that untracked guilds are skipped and a failing guild does not abort it.
///
/// Expected: tracked guild snapshot installed, other guild untouched
#[tokio::test]
async fn preload_installs_tracked_guilds() {
    let harness = Harness::new();
    let gateway = FakeGateway::default();
    gateway.set_invites(vec![invite("abc", 3, None)]);

    harness
        .processor
        .preload_invites(&[OTHER_GUILD, GUILD], &gateway)
        .await;

    let referrals = &harness.engine.referrals;
    assert_eq!(referrals.previous_snapshot(GUILD).await.get("abc"), Some(&3));
    assert!(referrals.previous_snapshot(OTHER_GUILD).await.is_empty());

    let failing = FakeGateway::default().without_invites();
    harness.processor.preload_invites(&[GUILD], &failing).await;
    assert_eq!(referrals.previous_snapshot(GUILD).await.get("abc"), Some(&3));
}

#[tokio::test]
async fn reports_member_left() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness
        .process(
            CommunityEvent::MemberLeft(MemberLeft {
                guild: guild(),
                user: user(5, "alice"),
                left_at: at(0),
            }),
            &gateway,
        )
        .await;

    let records = harness.drain();
    assert_eq!(records[0].event, AnalyticsEvent::UserLeft);
    assert_eq!(records[0].property("left_at"), Some(&at(0).to_rfc3339().into()));
}

#[tokio::test]
async fn reports_ban() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness
        .process(
            CommunityEvent::MemberBanned(MemberBanned {
                guild: guild(),
                user: user(5, "alice"),
                banned_at: at(0),
            }),
            &gateway,
        )
        .await;

    let records = harness.drain();
    assert_eq!(records[0].event, AnalyticsEvent::UserBanned);
    assert_eq!(records[0].property("guild_name"), Some(&"Test Guild".into()));
}

/// Tests a deletion whose message was no longer cached.
///
/// Expected: record with "unknown" author
#[tokio::test]
async fn deletion_of_uncached_message() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness
        .process(
            CommunityEvent::MessageDeleted(MessageDeleted {
                guild: guild(),
                channel: channel(GENERAL, "general"),
                message_id: 77,
                author: None,
                deleted_at: at(0),
            }),
            &gateway,
        )
        .await;

    let records = harness.drain();
    assert_eq!(records[0].event, AnalyticsEvent::MessageDeleted);
    assert_eq!(records[0].distinct_id, "unknown");
    assert_eq!(records[0].property("username"), Some(&"unknown".into()));
}

#[tokio::test]
async fn deletion_of_bot_message_ignored() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness
        .process(
            CommunityEvent::MessageDeleted(MessageDeleted {
                guild: guild(),
                channel: channel(GENERAL, "general"),
                message_id: 77,
                author: Some(bot(9, "helper")),
                deleted_at: at(0),
            }),
            &gateway,
        )
        .await;

    assert!(harness.drain().is_empty());
}

fn reaction(reactor: UserInfo) -> CommunityEvent {
    CommunityEvent::ReactionAdded(ReactionAdded {
        guild: guild(),
        channel: channel(GENERAL, "general"),
        message_id: 77,
        user: reactor,
        emoji: EmojiInfo {
            name: Some("🔥".to_string()),
            id: None,
        },
    })
}

#[tokio::test]
async fn reports_reaction() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness.process(reaction(user(5, "alice")), &gateway).await;

    let records = harness.drain();
    assert_eq!(records[0].event, AnalyticsEvent::ReactionAdded);
    assert_eq!(records[0].property("emoji_name"), Some(&"🔥".into()));
    assert_eq!(records[0].property("emoji_id"), Some(&serde_json::Value::Null));
}

#[tokio::test]
async fn bot_reaction_ignored() {
    let mut harness = Harness::new();
    let gateway = FakeGateway::default();

    harness.process(reaction(bot(9, "helper")), &gateway).await;

    assert!(harness.drain().is_empty());
}
