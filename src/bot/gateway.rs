//! Serenity-backed implementation of the processor's Discord port.

use std::sync::Arc;

use serenity::all::{ChannelId, Context, CreateMessage, GuildId, MessageId, UserId};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::{Http, HttpError};

use crate::error::AppError;
use crate::model::invite::InviteUsage;
use crate::model::member::MemberProfile;
use crate::service::gateway::Gateway;

pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(ctx: &Context) -> Self {
        Self {
            http: ctx.http.clone(),
            cache: ctx.cache.clone(),
        }
    }

    /// Resolves a member from the gateway cache without any HTTP call.
    fn cached_member(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberProfile> {
        let guild = self.cache.guild(guild_id)?;
        let member = guild.members.get(&user_id)?;

        Some(MemberProfile::from_member(
            member,
            &guild.roles,
            guild.owner_id,
        ))
    }
}

#[async_trait]
impl Gateway for SerenityGateway {
    async fn fetch_invites(&self, guild_id: u64) -> Result<Vec<InviteUsage>, AppError> {
        let invites = self.http.get_guild_invites(GuildId::new(guild_id)).await?;

        Ok(invites.iter().map(InviteUsage::from).collect())
    }

    /// Tries the cache first, then falls back to fetching the member and the guild's
    /// roles over HTTP.
    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberProfile>, AppError> {
        let guild_id = GuildId::new(guild_id);
        let user_id = UserId::new(user_id);

        if let Some(profile) = self.cached_member(guild_id, user_id) {
            return Ok(Some(profile));
        }

        let member = match self.http.get_member(guild_id, user_id).await {
            Ok(member) => member,
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let guild = self.http.get_guild(guild_id).await?;

        Ok(Some(MemberProfile::from_member(
            &member,
            &guild.roles,
            guild.owner_id,
        )))
    }

    async fn reply(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message = CreateMessage::new()
            .content(content)
            .reference_message((channel_id, MessageId::new(message_id)));

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}
