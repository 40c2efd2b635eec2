//! Domain models shared by the scoring engine and the Discord adapter.
//!
//! These types are the ingestion boundary: serenity objects are converted into them by
//! the bot handlers, and everything past the handlers (services, data stores, analytics)
//! works only with these models.

pub mod analytics;
pub mod event;
pub mod invite;
pub mod leaderboard;
pub mod member;
pub mod voice;
