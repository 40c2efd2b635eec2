use chrono::Utc;
use serenity::all::{ChannelId, Context, GuildId, Message, MessageId};

use super::{channel_info, guild_info};
use crate::model::event::{CommunityEvent, MessageCreated, MessageDeleted};
use crate::model::member::UserInfo;

/// Builds the message event, dropping direct messages.
pub fn message_created(ctx: &Context, message: &Message) -> Option<CommunityEvent> {
    let Some(guild_id) = message.guild_id else {
        tracing::trace!("Ignoring direct message {}", message.id);
        return None;
    };

    Some(CommunityEvent::MessageCreated(MessageCreated {
        guild: guild_info(ctx, guild_id),
        channel: channel_info(ctx, guild_id, message.channel_id),
        message_id: message.id.get(),
        author: UserInfo::from(&message.author),
        content: message.content.clone(),
        mentions: message.mentions.iter().map(UserInfo::from).collect(),
        sent_at: message.timestamp.to_utc(),
    }))
}

/// Builds the deletion event. The author is known only if the message was seen.
pub fn message_deleted(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    message_id: MessageId,
    author: Option<UserInfo>,
) -> CommunityEvent {
    CommunityEvent::MessageDeleted(MessageDeleted {
        guild: guild_info(ctx, guild_id),
        channel: channel_info(ctx, guild_id, channel_id),
        message_id: message_id.get(),
        author,
        deleted_at: Utc::now(),
    })
}
