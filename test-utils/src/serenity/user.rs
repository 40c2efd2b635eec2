//! Test factory for creating Serenity User objects.

use serde_json::Value;
use serenity::all::User;

/// JSON for a user on the new username system (no discriminator).
pub(crate) fn user_json(user_id: u64, username: &str, bot: bool) -> Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    })
}

/// Creates a test Serenity User.
///
/// The user has no discriminator, so `User::tag()` returns the bare username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username
/// - `bot` - Whether the account is a bot
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "alice", false);
/// assert_eq!(user.tag(), "alice");
/// ```
pub fn create_test_user(user_id: u64, username: &str, bot: bool) -> User {
    serde_json::from_value(user_json(user_id, username, bot))
        .expect("Failed to create test user - invalid JSON structure")
}
