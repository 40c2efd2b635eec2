//! Test factory for creating Serenity RichInvite objects.

use serenity::all::{RichInvite, User};

/// Creates a test invite as returned by the guild invites endpoint.
///
/// # Arguments
/// - `code` - Invite code
/// - `uses` - Number of times the invite has been used
/// - `inviter` - User who created the invite, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a RichInvite (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_invite, create_test_user};
///
/// let inviter = create_test_user(1, "alice", false);
/// let invite = create_test_invite("abc123", 4, Some(&inviter));
/// assert_eq!(invite.uses, 4);
/// ```
pub fn create_test_invite(code: &str, uses: u64, inviter: Option<&User>) -> RichInvite {
    let inviter = inviter
        .map(serde_json::to_value)
        .transpose()
        .expect("Failed to serialize test inviter");

    serde_json::from_value(serde_json::json!({
        "channel": {
            "id": "200000000000000000",
            "name": "general",
            "type": 0,
        },
        "code": code,
        "created_at": "2020-01-01T00:00:00.000000+00:00",
        "guild": null,
        "inviter": inviter,
        "max_age": 0,
        "max_uses": 0,
        "temporary": false,
        "uses": uses,
    }))
    .expect("Failed to create test invite - invalid JSON structure")
}
