//! In-memory stores for all engine state.
//!
//! Each store owns one piece of mutable state behind its own lock and exposes small
//! atomic operations. No lock is ever held across an await on an external call, so a
//! mutation is atomic with respect to other event handlers. Nothing here is persisted;
//! all state starts empty at process start.

pub mod engagement;
pub mod invite;
pub mod message_state;
pub mod referral;
pub mod voice;

mod tally;

#[cfg(test)]
mod test;
