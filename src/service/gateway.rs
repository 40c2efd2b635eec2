//! Outbound Discord calls needed while processing events.
//!
//! The processor only ever talks to Discord through this trait so that the scoring flows
//! can be exercised without a gateway connection.

use serenity::async_trait;

use crate::error::AppError;
use crate::model::invite::InviteUsage;
use crate::model::member::MemberProfile;

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetches the current invite list of a guild with use counts.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<InviteUsage>)` - Every invite visible to the bot, in API order
    /// - `Err(AppError::DiscordErr)` - Missing permission or HTTP failure
    async fn fetch_invites(&self, guild_id: u64) -> Result<Vec<InviteUsage>, AppError>;

    /// Resolves a guild member with permissions.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(MemberProfile))` - Member found
    /// - `Ok(None)` - User is not a member of the guild
    /// - `Err(AppError::DiscordErr)` - Lookup failed
    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberProfile>, AppError>;

    /// Replies to a message in the channel it was sent in.
    async fn reply(&self, channel_id: u64, message_id: u64, content: &str)
        -> Result<(), AppError>;
}
