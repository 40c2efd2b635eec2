//! Scoring eligibility rules.
//!
//! Bots, staff and explicitly configured members and roles never earn engagement or
//! referral points. Their activity is still reported to analytics.

use std::collections::HashSet;

use serenity::all::Permissions;

use crate::model::member::{MemberProfile, UserInfo};

/// Holding any of these marks a member as staff.
const STAFF_PERMISSIONS: [Permissions; 6] = [
    Permissions::ADMINISTRATOR,
    Permissions::MODERATE_MEMBERS,
    Permissions::MANAGE_GUILD,
    Permissions::MANAGE_MESSAGES,
    Permissions::KICK_MEMBERS,
    Permissions::BAN_MEMBERS,
];

/// Immutable exclusion configuration loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    excluded_role_ids: HashSet<u64>,
    excluded_user_ids: HashSet<u64>,
}

impl ExclusionPolicy {
    pub fn new(excluded_role_ids: HashSet<u64>, excluded_user_ids: HashSet<u64>) -> Self {
        Self {
            excluded_role_ids,
            excluded_user_ids,
        }
    }

    /// Decides whether a member is ineligible for scoring.
    ///
    /// Checks, in order: bot flag, explicit user list, staff permissions, excluded roles.
    ///
    /// # Arguments
    /// - `member` - The member, or `None` when it could not be resolved
    ///
    /// # Returns
    /// - `true` - Member must not be scored
    /// - `false` - Member is eligible, or unknown
    pub fn is_excluded(&self, member: Option<&MemberProfile>) -> bool {
        let Some(member) = member else {
            return false;
        };

        member.bot
            || self.excluded_user_ids.contains(&member.user_id)
            || STAFF_PERMISSIONS
                .iter()
                .any(|p| member.permissions.contains(*p))
            || member.has_any_role(&self.excluded_role_ids)
    }

    /// Applies the checks possible without a member profile: bot flag and user list.
    ///
    /// Used when the member lookup failed, for example for an inviter who has since
    /// left the guild.
    pub fn is_user_excluded(&self, user: &UserInfo) -> bool {
        user.bot || self.excluded_user_ids.contains(&user.id)
    }
}
