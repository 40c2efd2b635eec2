use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::processor::EventProcessor;

/// Builds the Discord client without connecting.
///
/// The returned client's `http` can be used for leaderboard calls before the gateway
/// connection is started.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token
/// - `processor` - Processor receiving every normalized event
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    processor: Arc<EventProcessor>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_INVITES;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(processor))
        .await?;

    Ok(client)
}

/// Runs the gateway connection until the shard manager is shut down.
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
