//! Normalized community events.
//!
//! One variant per event kind, each carrying only the fields the engine needs. The bot
//! handlers build these from serenity callbacks and drop anything that cannot be
//! represented (for example direct messages, which have no guild).

use chrono::{DateTime, Utc};

use crate::model::member::UserInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    pub id: u64,
    /// Empty when the guild is not in the cache.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiInfo {
    pub name: Option<String>,
    /// Only custom emoji have an id.
    pub id: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct MemberJoined {
    pub guild: GuildInfo,
    pub user: UserInfo,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemberLeft {
    pub guild: GuildInfo,
    pub user: UserInfo,
    pub left_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MessageCreated {
    pub guild: GuildInfo,
    pub channel: ChannelInfo,
    pub message_id: u64,
    pub author: UserInfo,
    pub content: String,
    pub mentions: Vec<UserInfo>,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MessageDeleted {
    pub guild: GuildInfo,
    pub channel: ChannelInfo,
    pub message_id: u64,
    /// Known only when the message was still cached.
    pub author: Option<UserInfo>,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReactionAdded {
    pub guild: GuildInfo,
    pub channel: ChannelInfo,
    pub message_id: u64,
    pub user: UserInfo,
    pub emoji: EmojiInfo,
}

#[derive(Debug, Clone)]
pub struct MemberBanned {
    pub guild: GuildInfo,
    pub user: UserInfo,
    pub banned_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VoiceStateChanged {
    pub guild: GuildInfo,
    pub user: UserInfo,
    pub old_channel: Option<ChannelInfo>,
    pub new_channel: Option<ChannelInfo>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InviteCreated {
    pub guild: GuildInfo,
    pub code: String,
    pub uses: u64,
    pub inviter: Option<UserInfo>,
    pub max_uses: u64,
    pub temporary: bool,
}

/// Gateway event normalized for the engine.
#[derive(Debug, Clone)]
pub enum CommunityEvent {
    MemberJoined(MemberJoined),
    MemberLeft(MemberLeft),
    MessageCreated(MessageCreated),
    MessageDeleted(MessageDeleted),
    ReactionAdded(ReactionAdded),
    MemberBanned(MemberBanned),
    VoiceStateChanged(VoiceStateChanged),
    InviteCreated(InviteCreated),
}

impl CommunityEvent {
    pub fn guild_id(&self) -> u64 {
        match self {
            Self::MemberJoined(e) => e.guild.id,
            Self::MemberLeft(e) => e.guild.id,
            Self::MessageCreated(e) => e.guild.id,
            Self::MessageDeleted(e) => e.guild.id,
            Self::ReactionAdded(e) => e.guild.id,
            Self::MemberBanned(e) => e.guild.id,
            Self::VoiceStateChanged(e) => e.guild.id,
            Self::InviteCreated(e) => e.guild.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MemberJoined(_) => "member_joined",
            Self::MemberLeft(_) => "member_left",
            Self::MessageCreated(_) => "message_created",
            Self::MessageDeleted(_) => "message_deleted",
            Self::ReactionAdded(_) => "reaction_added",
            Self::MemberBanned(_) => "member_banned",
            Self::VoiceStateChanged(_) => "voice_state_changed",
            Self::InviteCreated(_) => "invite_created",
        }
    }
}
