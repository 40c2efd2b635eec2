//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role granting the given permissions.
///
/// All other fields are set to reasonable defaults (no color, not hoisted, not managed,
/// not mentionable, position 1). Use the guild id as `role_id` to build `@everyone`.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `permissions` - Permission bits, e.g. `Permissions::MANAGE_MESSAGES.bits()`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Moderator", Permissions::MODERATE_MEMBERS.bits());
/// assert!(role.permissions.moderate_members());
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
