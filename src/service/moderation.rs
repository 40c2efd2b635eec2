//! The `!warn` text command.

use crate::service::spam::MOD_COMMAND_PREFIX;

const WARN_COMMAND: &str = "warn";

pub const WARN_USAGE: &str = "Please mention a user to warn. Example: `!warn @user Spamming`";

const DEFAULT_REASON: &str = "No reason provided";

/// Whether the raw message content invokes `!warn`.
pub fn is_warn_command(content: &str) -> bool {
    content
        .strip_prefix(MOD_COMMAND_PREFIX)
        .is_some_and(|rest| rest.starts_with(WARN_COMMAND))
}

/// Extracts the reason from `!warn @user reason...`.
///
/// Everything after the second space-separated token is the reason.
pub fn warn_reason(content: &str) -> String {
    let reason = content.split(' ').skip(2).collect::<Vec<_>>().join(" ");

    if reason.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        reason
    }
}

pub fn warn_confirmation(warned_user_id: u64, reason: &str) -> String {
    format!("⚠️ Warning logged for <@{}>. Reason: {}", warned_user_id, reason)
}
