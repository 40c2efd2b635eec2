//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once the bot has authenticated with the gateway. It is used to
//! install the invite baseline of every tracked guild before any join has to be
//! attributed. The event fires again after a reconnect, which refreshes the baseline.

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::gateway::SerenityGateway;
use crate::service::processor::EventProcessor;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `processor` - Event processor owning the invite snapshots
/// - `ctx` - Discord context for HTTP access and activity status
/// - `ready` - Ready event data containing the bot user and its guilds
pub async fn handle_ready(processor: &EventProcessor, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("community activity")));

    let guild_ids: Vec<u64> = ready.guilds.iter().map(|g| g.id.get()).collect();
    processor
        .preload_invites(&guild_ids, &SerenityGateway::new(&ctx))
        .await;
}
