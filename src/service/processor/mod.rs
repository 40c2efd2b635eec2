//! Routes normalized community events through the scoring engine.
//!
//! Every handler follows the same pattern: update engine state, then queue analytics
//! records. Discord calls made along the way go through the [`Gateway`] port; their
//! failures are logged and the affected step is skipped.

mod invite;
mod member;
mod message;
mod reaction;
mod voice;

use serde_json::Value;
use std::sync::Arc;

use crate::config::GuildScope;
use crate::model::event::CommunityEvent;
use crate::service::{analytics::AnalyticsClient, engine::ScoringEngine, gateway::Gateway};

pub struct EventProcessor {
    engine: Arc<ScoringEngine>,
    analytics: AnalyticsClient,
    scope: GuildScope,
    /// Name of the channel whose messages emit the announcements record.
    announcements_channel: String,
}

impl EventProcessor {
    pub fn new(
        engine: Arc<ScoringEngine>,
        analytics: AnalyticsClient,
        scope: GuildScope,
        announcements_channel: String,
    ) -> Self {
        Self {
            engine,
            analytics,
            scope,
            announcements_channel,
        }
    }

    /// Whether events from this guild are processed at all.
    pub fn tracks(&self, guild_id: u64) -> bool {
        self.scope.tracks(guild_id)
    }

    /// Processes one event from the gateway.
    ///
    /// Events from guilds outside the configured scope are dropped before any state is
    /// touched.
    ///
    /// # Arguments
    /// - `event` - Normalized event
    /// - `gateway` - Port for the Discord calls the event may need
    pub async fn process(&self, event: CommunityEvent, gateway: &dyn Gateway) {
        if !self.scope.tracks(event.guild_id()) {
            tracing::trace!(
                "Ignoring {} from untracked guild {}",
                event.kind(),
                event.guild_id()
            );
            return;
        }

        match event {
            CommunityEvent::MemberJoined(e) => self.on_member_joined(e, gateway).await,
            CommunityEvent::MemberLeft(e) => self.on_member_left(e),
            CommunityEvent::MemberBanned(e) => self.on_member_banned(e),
            CommunityEvent::MessageCreated(e) => self.on_message_created(e, gateway).await,
            CommunityEvent::MessageDeleted(e) => self.on_message_deleted(e),
            CommunityEvent::ReactionAdded(e) => self.on_reaction_added(e),
            CommunityEvent::VoiceStateChanged(e) => self.on_voice_state_changed(e).await,
            CommunityEvent::InviteCreated(e) => self.on_invite_created(e).await,
        }
    }

    /// Installs the invite baseline of each tracked guild.
    ///
    /// Called once the gateway reports ready. A guild whose invites cannot be fetched
    /// keeps an empty baseline, so its first join may credit an old invite.
    pub async fn preload_invites(&self, guild_ids: &[u64], gateway: &dyn Gateway) {
        for &guild_id in guild_ids.iter().filter(|id| self.scope.tracks(**id)) {
            match gateway.fetch_invites(guild_id).await {
                Ok(invites) => {
                    self.engine
                        .referrals
                        .load_snapshot(guild_id, &invites)
                        .await;
                    tracing::info!(
                        "Cached {} invites for guild {}",
                        invites.len(),
                        guild_id
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to fetch invites for guild {}: {}", guild_id, e);
                }
            }
        }
    }
}

/// Adds the entries of `extra` to the object `base`.
fn extend(mut base: Value, extra: Value) -> Value {
    if let (Value::Object(base_map), Value::Object(extra_map)) = (&mut base, extra) {
        base_map.extend(extra_map);
    }
    base
}
