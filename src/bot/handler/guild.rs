use chrono::Utc;
use serenity::all::{Context, GuildId, User};

use super::guild_info;
use crate::model::event::{CommunityEvent, MemberBanned};
use crate::model::member::UserInfo;

/// Builds the ban event from a guild_ban_addition payload.
pub fn member_banned(ctx: &Context, guild_id: GuildId, user: &User) -> CommunityEvent {
    CommunityEvent::MemberBanned(MemberBanned {
        guild: guild_info(ctx, guild_id),
        user: UserInfo::from(user),
        banned_at: Utc::now(),
    })
}
