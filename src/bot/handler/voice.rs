use chrono::Utc;
use serenity::all::{Context, VoiceState};

use super::{channel_info, guild_info};
use crate::model::event::{CommunityEvent, VoiceStateChanged};
use crate::model::member::UserInfo;

/// Builds the voice event from the cached previous state and the new state.
///
/// The previous state comes from serenity's cache, so after a restart a member already in
/// a channel looks like a fresh join.
pub fn voice_state_changed(
    ctx: &Context,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> Option<CommunityEvent> {
    let Some(guild_id) = new.guild_id.or_else(|| old.and_then(|o| o.guild_id)) else {
        tracing::trace!("Ignoring voice state update without guild");
        return None;
    };

    let user = match &new.member {
        Some(member) => UserInfo::from(&member.user),
        None => match ctx.cache.user(new.user_id) {
            Some(user) => UserInfo::from(&*user),
            None => {
                tracing::debug!(
                    "Dropping voice state update of unknown user {}",
                    new.user_id
                );
                return None;
            }
        },
    };

    Some(CommunityEvent::VoiceStateChanged(VoiceStateChanged {
        guild: guild_info(ctx, guild_id),
        user,
        old_channel: old
            .and_then(|o| o.channel_id)
            .map(|id| channel_info(ctx, guild_id, id)),
        new_channel: new.channel_id.map(|id| channel_info(ctx, guild_id, id)),
        changed_at: Utc::now(),
    }))
}
