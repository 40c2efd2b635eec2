//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use crate::serenity::user::user_json;

/// Creates a test Serenity guild Member.
///
/// The member's user is a non-bot account without a discriminator, joined in 2020.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID
/// - `username` - Username of the member's user
/// - `role_ids` - Assigned roles, not including `@everyone`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(500, 1, "alice", &[10, 11]);
/// assert_eq!(member.roles.len(), 2);
/// ```
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str, role_ids: &[u64]) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username, false),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
