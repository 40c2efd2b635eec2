use serenity::all::{Context, InviteCreateEvent};

use super::guild_info;
use crate::model::event::{CommunityEvent, InviteCreated};
use crate::model::member::UserInfo;

/// Builds the invite event, dropping invites to group DMs.
pub fn invite_created(ctx: &Context, invite: &InviteCreateEvent) -> Option<CommunityEvent> {
    let Some(guild_id) = invite.guild_id else {
        tracing::trace!("Ignoring invite {} without guild", invite.code);
        return None;
    };

    Some(CommunityEvent::InviteCreated(InviteCreated {
        guild: guild_info(ctx, guild_id),
        code: invite.code.clone(),
        uses: u64::from(invite.uses),
        inviter: invite.inviter.as_ref().map(UserInfo::from),
        max_uses: u64::from(invite.max_uses),
        temporary: invite.temporary,
    }))
}
