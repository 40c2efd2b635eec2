//! Discord gateway adapter.
//!
//! Connects to Discord with serenity, converts gateway events into community events and
//! exposes the Discord calls the processor needs through [`gateway::SerenityGateway`].
//!
//! # Gateway Intents
//!
//! - `GUILDS`, `GUILD_MEMBERS` - Guild cache, joins and leaves
//! - `GUILD_MESSAGES`, `MESSAGE_CONTENT` - Message text for scoring and `!warn`
//! - `GUILD_MESSAGE_REACTIONS` - Reactions
//! - `GUILD_MODERATION` - Bans
//! - `GUILD_VOICE_STATES` - Voice sessions
//! - `GUILD_INVITES` - Invite creation
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod gateway;
pub mod handler;
pub mod start;
