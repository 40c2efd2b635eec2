use serenity::all::{Context, GuildId, Reaction, ReactionType};

use super::{channel_info, guild_info};
use crate::model::event::{CommunityEvent, EmojiInfo, ReactionAdded};
use crate::model::member::UserInfo;

/// Builds the reaction event, resolving the reacting user when the payload has no member.
pub async fn reaction_added(
    ctx: &Context,
    guild_id: GuildId,
    reaction: &Reaction,
) -> Option<CommunityEvent> {
    let user = match &reaction.member {
        Some(member) => UserInfo::from(&member.user),
        None => match reaction.user(ctx).await {
            Ok(user) => UserInfo::from(&user),
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve user for reaction on message {}: {}",
                    reaction.message_id,
                    e
                );
                return None;
            }
        },
    };

    Some(CommunityEvent::ReactionAdded(ReactionAdded {
        guild: guild_info(ctx, guild_id),
        channel: channel_info(ctx, guild_id, reaction.channel_id),
        message_id: reaction.message_id.get(),
        user,
        emoji: emoji_info(&reaction.emoji),
    }))
}

pub fn emoji_info(emoji: &ReactionType) -> EmojiInfo {
    match emoji {
        ReactionType::Custom { id, name, .. } => EmojiInfo {
            name: name.clone(),
            id: Some(id.get()),
        },
        ReactionType::Unicode(name) => EmojiInfo {
            name: Some(name.clone()),
            id: None,
        },
        _ => EmojiInfo {
            name: None,
            id: None,
        },
    }
}
