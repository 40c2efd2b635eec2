//! Leaderboard message management.
//!
//! A single message in the configured channel shows both leaderboards. It is created (or
//! an existing one is reused) once at startup and then replaced wholesale on every
//! refresh. Refresh failures are logged and retried on the next tick only.

pub mod render;

use serenity::all::{ChannelId, CreateMessage, EditMessage, MessageId};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::LeaderboardConfig;
use crate::error::AppError;
use crate::service::engine::ScoringEngine;

const PLACEHOLDER: &str = "🏆 Loading leaderboards...";

/// Publishes rendered ledger snapshots to the leaderboard message.
pub struct LeaderboardPublisher {
    /// Discord HTTP client for sending and editing the message
    http: Arc<Http>,
    /// Engine whose ledgers are rendered
    engine: Arc<ScoringEngine>,
    channel_id: ChannelId,
    /// Message id from configuration, tried first at setup
    configured_message_id: Option<MessageId>,
    /// Message currently being edited, set by `setup`
    message_id: RwLock<Option<MessageId>>,
}

impl LeaderboardPublisher {
    /// Creates a new publisher. No Discord calls are made until `setup`.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `engine` - Scoring engine owning the ledgers
    /// - `config` - Leaderboard channel and optional message to reuse
    pub fn new(http: Arc<Http>, engine: Arc<ScoringEngine>, config: LeaderboardConfig) -> Self {
        Self {
            http,
            engine,
            channel_id: ChannelId::new(config.channel_id),
            configured_message_id: config.message_id.map(MessageId::new),
            message_id: RwLock::new(None),
        }
    }

    /// Resolves the message to edit, creating one if needed.
    ///
    /// Reuses the configured message when it can be fetched. When it cannot (deleted,
    /// wrong channel) or none was configured, posts a placeholder message and logs its id
    /// so the operator can pin it in configuration.
    ///
    /// # Returns
    /// - `Ok(())` - A leaderboard message is ready to be edited
    /// - `Err(AppError::DiscordErr)` - The placeholder message could not be posted
    pub async fn setup(&self) -> Result<(), AppError> {
        if let Some(message_id) = self.configured_message_id {
            match self.http.get_message(self.channel_id, message_id).await {
                Ok(message) => {
                    tracing::info!("Reusing existing leaderboard message {}", message.id);
                    *self.message_id.write().await = Some(message.id);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        "Leaderboard message {} not found in channel {} ({}), creating a new one",
                        message_id,
                        self.channel_id,
                        e
                    );
                }
            }
        }

        let message = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().content(PLACEHOLDER))
            .await?;

        tracing::info!(
            "Posted leaderboard message, set LEADERBOARD_MESSAGE_ID={} to reuse it",
            message.id
        );
        *self.message_id.write().await = Some(message.id);

        Ok(())
    }

    /// Re-renders both ledgers into the leaderboard message.
    ///
    /// # Returns
    /// - `Ok(())` - Message edited, or skipped because setup has not completed
    /// - `Err(AppError::DiscordErr)` - The edit failed
    pub async fn refresh(&self) -> Result<(), AppError> {
        let Some(message_id) = *self.message_id.read().await else {
            tracing::debug!("Leaderboard message not set up, skipping refresh");
            return Ok(());
        };

        let text = self.engine.render_leaderboard().await;
        let edit = EditMessage::new().content(text);

        self.http
            .edit_message(self.channel_id, message_id, &edit, vec![])
            .await?;

        tracing::debug!(
            "Refreshed leaderboard message {} ({} members ranked)",
            message_id,
            self.engine.engagement.len().await
        );
        self.engine.log_leaders().await;

        Ok(())
    }
}
