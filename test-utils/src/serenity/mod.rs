//! Test factories for creating Serenity API objects.
//!
//! Each factory deserializes a JSON document shaped like the corresponding Discord API
//! response, with sensible defaults for every field the bot does not read.
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects with permissions
//! - `invite::create_test_invite` - Create Serenity RichInvite objects

pub mod channel;
pub mod invite;
pub mod member;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use invite::create_test_invite;
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
