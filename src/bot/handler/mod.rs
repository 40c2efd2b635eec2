//! Serenity event handler.
//!
//! Each callback converts the serenity payload into a [`CommunityEvent`] and hands it to
//! the [`EventProcessor`]. Payloads that cannot be represented (no guild, unknown user)
//! are logged and dropped here.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, GuildId, InviteCreateEvent, Member, Message,
    MessageId, Reaction, Ready, User, VoiceState,
};
use serenity::async_trait;

use crate::bot::gateway::SerenityGateway;
use crate::model::event::{ChannelInfo, CommunityEvent, GuildInfo};
use crate::model::member::UserInfo;
use crate::service::processor::EventProcessor;

pub mod guild;
pub mod invite;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod voice;

/// Number of recent message authors remembered for deletion reports.
const RECENT_AUTHORS_CAPACITY: u64 = 10_000;

const RECENT_AUTHORS_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Discord bot event handler
pub struct Handler {
    processor: Arc<EventProcessor>,
    /// Message id to author, since deletion events only carry ids.
    recent_authors: Cache<u64, UserInfo>,
}

impl Handler {
    pub fn new(processor: Arc<EventProcessor>) -> Self {
        let recent_authors = Cache::builder()
            .max_capacity(RECENT_AUTHORS_CAPACITY)
            .time_to_live(RECENT_AUTHORS_TTL)
            .build();

        Self {
            processor,
            recent_authors,
        }
    }

    async fn dispatch(&self, ctx: &Context, event: CommunityEvent) {
        let gateway = SerenityGateway::new(ctx);
        self.processor.process(event, &gateway).await;
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.processor, ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let event = member::member_joined(&ctx, &new_member);
        self.dispatch(&ctx, event).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        let event = member::member_left(&ctx, guild_id, &user);
        self.dispatch(&ctx, event).await;
    }

    /// Called when a member is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        let event = guild::member_banned(&ctx, guild_id, &banned_user);
        self.dispatch(&ctx, event).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        let Some(event) = message::message_created(&ctx, &new_message) else {
            return;
        };

        self.recent_authors
            .insert(new_message.id.get(), UserInfo::from(&new_message.author))
            .await;
        self.dispatch(&ctx, event).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        let Some(guild_id) = guild_id else {
            return;
        };

        let author = self.recent_authors.remove(&deleted_message_id.get()).await;
        let event =
            message::message_deleted(&ctx, guild_id, channel_id, deleted_message_id, author);
        self.dispatch(&ctx, event).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        let Some(guild_id) = add_reaction.guild_id else {
            return;
        };
        if !self.processor.tracks(guild_id.get()) {
            return;
        }

        if let Some(event) = reaction::reaction_added(&ctx, guild_id, &add_reaction).await {
            self.dispatch(&ctx, event).await;
        }
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        if let Some(event) = voice::voice_state_changed(&ctx, old.as_ref(), &new) {
            self.dispatch(&ctx, event).await;
        }
    }

    /// Called when an invite is created
    async fn invite_create(&self, ctx: Context, data: InviteCreateEvent) {
        if let Some(event) = invite::invite_created(&ctx, &data) {
            self.dispatch(&ctx, event).await;
        }
    }
}

/// Guild id with its cached name, empty when the guild is not cached yet.
fn guild_info(ctx: &Context, guild_id: GuildId) -> GuildInfo {
    let name = ctx
        .cache
        .guild(guild_id)
        .map(|guild| guild.name.clone())
        .unwrap_or_default();

    GuildInfo {
        id: guild_id.get(),
        name,
    }
}

/// Channel id with its name from the cached guild, `None` when not cached.
fn channel_info(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> ChannelInfo {
    let name = ctx
        .cache
        .guild(guild_id)
        .and_then(|guild| channel_name(&guild.channels, &guild.threads, channel_id));

    ChannelInfo {
        id: channel_id.get(),
        name,
    }
}

/// Looks a channel up among a guild's channels, then its active threads.
fn channel_name(
    channels: &HashMap<ChannelId, GuildChannel>,
    threads: &[GuildChannel],
    channel_id: ChannelId,
) -> Option<String> {
    channels
        .get(&channel_id)
        .or_else(|| threads.iter().find(|thread| thread.id == channel_id))
        .map(|channel| channel.name.clone())
}
