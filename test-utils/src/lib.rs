//! Pulseboard Test Utils
//!
//! Shared testing utilities for the pulseboard bot. The bot converts serenity payloads
//! into its own models at the gateway boundary; the factories here build those payloads
//! the way Discord sends them, by deserializing JSON, so the conversions can be tested
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn test_permissions() {
//!     let member = create_test_member(500, 1, "alice", &[10]);
//!     let role = create_test_role(10, "Staff", 0x2000);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
