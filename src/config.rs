use std::collections::HashSet;

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::{parse_id, parse_id_list};

const DEFAULT_POSTHOG_HOST: &str = "https://app.posthog.com";
const DEFAULT_ANNOUNCEMENTS_CHANNEL: &str = "announcements";

/// Restricts event processing to a single guild when configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildScope(Option<u64>);

impl GuildScope {
    pub fn new(guild_id: Option<u64>) -> Self {
        Self(guild_id)
    }

    /// Every guild is tracked when no scope is configured.
    pub fn tracks(&self, guild_id: u64) -> bool {
        self.0.is_none_or(|id| id == guild_id)
    }
}

/// Location of the leaderboard message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardConfig {
    pub channel_id: u64,
    /// Existing message to reuse across restarts.
    pub message_id: Option<u64>,
}

pub struct Config {
    pub discord_token: String,

    pub posthog_api_key: String,
    pub posthog_host: String,

    pub guild_scope: GuildScope,
    pub leaderboard: Option<LeaderboardConfig>,

    pub excluded_role_ids: HashSet<u64>,
    pub excluded_user_ids: HashSet<u64>,

    /// Channel name whose messages are reported as announcement engagement.
    pub announcements_channel: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones, so an empty line such as
    /// `GUILD_ID=` in `.env` disables the scope filter instead of failing to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));
        let optional_id = |name: &str| var(name).map(|v| parse_id(name, &v)).transpose();
        let id_list = |name: &str| {
            var(name)
                .map(|v| parse_id_list(name, &v))
                .transpose()
                .map(Option::unwrap_or_default)
        };

        let leaderboard = match optional_id("LEADERBOARD_CHANNEL_ID")? {
            Some(channel_id) => Some(LeaderboardConfig {
                channel_id,
                message_id: optional_id("LEADERBOARD_MESSAGE_ID")?,
            }),
            None => None,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            posthog_api_key: required("POSTHOG_API_KEY")?,
            posthog_host: var("POSTHOG_HOST").unwrap_or_else(|| DEFAULT_POSTHOG_HOST.to_string()),
            guild_scope: GuildScope::new(optional_id("GUILD_ID")?),
            leaderboard,
            excluded_role_ids: id_list("EXCLUDED_ROLE_IDS")?,
            excluded_user_ids: id_list("EXCLUDED_USER_IDS")?,
            announcements_channel: var("ANNOUNCEMENTS_CHANNEL_NAME")
                .unwrap_or_else(|| DEFAULT_ANNOUNCEMENTS_CHANNEL.to_string()),
        })
    }
}
