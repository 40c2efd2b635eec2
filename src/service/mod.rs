//! Scoring, attribution and reporting logic.
//!
//! Nothing in this layer talks to serenity's client directly except the leaderboard
//! publisher; event processing reaches Discord only through [`gateway::Gateway`].

pub mod analytics;
pub mod engine;
pub mod exclusion;
pub mod gateway;
pub mod leaderboard;
pub mod moderation;
pub mod processor;
pub mod referral;
pub mod spam;
pub mod voice;

#[cfg(test)]
mod test;
