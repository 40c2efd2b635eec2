use chrono::Utc;
use serenity::all::{Context, GuildId, Member, User};

use super::guild_info;
use crate::model::event::{CommunityEvent, MemberJoined, MemberLeft};
use crate::model::member::UserInfo;

/// Builds the join event from a guild_member_addition payload.
pub fn member_joined(ctx: &Context, member: &Member) -> CommunityEvent {
    CommunityEvent::MemberJoined(MemberJoined {
        guild: guild_info(ctx, member.guild_id),
        user: UserInfo::from(&member.user),
        joined_at: member
            .joined_at
            .map(|t| t.to_utc())
            .unwrap_or_else(Utc::now),
    })
}

/// Builds the leave event from a guild_member_removal payload.
pub fn member_left(ctx: &Context, guild_id: GuildId, user: &User) -> CommunityEvent {
    CommunityEvent::MemberLeft(MemberLeft {
        guild: guild_info(ctx, guild_id),
        user: UserInfo::from(user),
        left_at: Utc::now(),
    })
}
