//! Analytics records forwarded to PostHog.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Event names understood by the analytics dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsEvent {
    UserJoined,
    UserLeft,
    MessageSent,
    MessageScored,
    MessageInAnnouncements,
    ReactionAdded,
    MessageDeleted,
    UserBanned,
    VoiceJoined,
    VoiceLeft,
    ReferralInviteCreated,
    ReferralJoin,
    WarningIssued,
}

impl AnalyticsEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserJoined => "discord_user_joined",
            Self::UserLeft => "discord_user_left",
            Self::MessageSent => "discord_message_sent",
            Self::MessageScored => "discord_message_scored",
            Self::MessageInAnnouncements => "discord_message_in_announcements",
            Self::ReactionAdded => "discord_reaction_added",
            Self::MessageDeleted => "discord_message_deleted_by_mod",
            Self::UserBanned => "discord_user_banned",
            Self::VoiceJoined => "discord_voice_joined",
            Self::VoiceLeft => "discord_voice_left",
            Self::ReferralInviteCreated => "discord_referral_invite_created",
            Self::ReferralJoin => "discord_referral_join",
            Self::WarningIssued => "discord_warning_issued",
        }
    }
}

/// A single analytics record: event name, subject and a flat property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsRecord {
    pub event: AnalyticsEvent,
    pub distinct_id: String,
    pub properties: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsRecord {
    /// Creates a record stamped with the current time.
    ///
    /// Non-object `properties` values are discarded, PostHog only accepts a flat map.
    pub fn new(event: AnalyticsEvent, distinct_id: impl ToString, properties: Value) -> Self {
        let properties = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            event,
            distinct_id: distinct_id.to_string(),
            properties,
            timestamp: Utc::now(),
        }
    }

    #[cfg(test)]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
