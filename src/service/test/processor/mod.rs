use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::Permissions;
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::GuildScope;
use crate::error::AppError;
use crate::model::analytics::{AnalyticsEvent, AnalyticsRecord};
use crate::model::event::{ChannelInfo, CommunityEvent, GuildInfo, MessageCreated};
use crate::model::invite::InviteUsage;
use crate::model::member::{MemberProfile, UserInfo};
use crate::service::{
    analytics::AnalyticsClient, engine::ScoringEngine, exclusion::ExclusionPolicy,
    gateway::Gateway, processor::EventProcessor,
};

mod invite_created;
mod member_joined;
mod other_events;

const GUILD: u64 = 1;
const OTHER_GUILD: u64 = 2;
const GENERAL: u64 = 10;
const ANNOUNCEMENTS: u64 = 11;

/// In-memory stand-in for Discord.
#[derive(Default)]
struct FakeGateway {
    invites: Mutex<Vec<InviteUsage>>,
    invites_unavailable: bool,
    members: HashMap<u64, MemberProfile>,
    replies: Mutex<Vec<String>>,
}

impl FakeGateway {
    fn with_member(mut self, member: MemberProfile) -> Self {
        self.members.insert(member.user_id, member);
        self
    }

    fn without_invites(mut self) -> Self {
        self.invites_unavailable = true;
        self
    }

    fn set_invites(&self, invites: Vec<InviteUsage>) {
        *self.invites.lock().unwrap() = invites;
    }

    fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn fetch_invites(&self, _guild_id: u64) -> Result<Vec<InviteUsage>, AppError> {
        if self.invites_unavailable {
            return Err(serenity::Error::Other("missing MANAGE_GUILD").into());
        }
        Ok(self.invites.lock().unwrap().clone())
    }

    async fn fetch_member(
        &self,
        _guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberProfile>, AppError> {
        Ok(self.members.get(&user_id).cloned())
    }

    async fn reply(
        &self,
        _channel_id: u64,
        _message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

/// Processor wired to an in-memory analytics queue.
struct Harness {
    processor: EventProcessor,
    engine: Arc<ScoringEngine>,
    records: UnboundedReceiver<AnalyticsRecord>,
}

impl Harness {
    fn new() -> Self {
        Self::with_policy(ExclusionPolicy::default())
    }

    fn with_policy(policy: ExclusionPolicy) -> Self {
        let engine = Arc::new(ScoringEngine::new(policy));
        let (analytics, records) = AnalyticsClient::in_memory();
        let processor = EventProcessor::new(
            engine.clone(),
            analytics,
            GuildScope::new(Some(GUILD)),
            "announcements".to_string(),
        );

        Self {
            processor,
            engine,
            records,
        }
    }

    async fn process(&self, event: CommunityEvent, gateway: &FakeGateway) {
        self.processor.process(event, gateway).await;
    }

    /// Takes every record queued so far.
    fn drain(&mut self) -> Vec<AnalyticsRecord> {
        let mut records = Vec::new();
        while let Ok(record) = self.records.try_recv() {
            records.push(record);
        }
        records
    }

    fn drain_events(&mut self) -> Vec<AnalyticsEvent> {
        self.drain().into_iter().map(|r| r.event).collect()
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs)
}

fn guild() -> GuildInfo {
    GuildInfo {
        id: GUILD,
        name: "Test Guild".to_string(),
    }
}

fn channel(id: u64, name: &str) -> ChannelInfo {
    ChannelInfo {
        id,
        name: Some(name.to_string()),
    }
}

fn user(id: u64, name: &str) -> UserInfo {
    UserInfo {
        id,
        display_name: name.to_string(),
        bot: false,
    }
}

fn bot(id: u64, name: &str) -> UserInfo {
    UserInfo {
        bot: true,
        ..user(id, name)
    }
}

fn member(id: u64, permissions: Permissions) -> MemberProfile {
    MemberProfile {
        user_id: id,
        display_name: format!("member{id}"),
        roles: Default::default(),
        permissions,
        bot: false,
    }
}

fn invite(code: &str, uses: u64, inviter: Option<UserInfo>) -> InviteUsage {
    InviteUsage {
        code: code.to_string(),
        uses,
        inviter,
    }
}

fn message(author: &UserInfo, content: &str, secs: i64) -> MessageCreated {
    MessageCreated {
        guild: guild(),
        channel: channel(GENERAL, "general"),
        message_id: 1_000 + secs as u64,
        author: author.clone(),
        content: content.to_string(),
        mentions: Vec::new(),
        sent_at: at(secs),
    }
}
