//! Member and user models.

use std::collections::{HashMap, HashSet};

use serenity::all::{Member, Permissions, Role, RoleId, User, UserId};

/// Minimal view of a Discord user attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: u64,
    /// `username#discriminator`, or the bare username for migrated accounts.
    pub display_name: String,
    pub bot: bool,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            display_name: user.tag(),
            bot: user.bot,
        }
    }
}

/// Guild member as seen by the exclusion policy.
///
/// Permissions are the guild-level permissions resolved from the member's roles, not
/// channel overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub user_id: u64,
    pub display_name: String,
    pub roles: HashSet<u64>,
    pub permissions: Permissions,
    pub bot: bool,
}

impl MemberProfile {
    /// Converts a serenity member into a profile, resolving its guild permissions.
    ///
    /// # Arguments
    /// - `member` - The serenity member
    /// - `guild_roles` - All roles of the member's guild, including `@everyone`
    /// - `owner_id` - Owner of the guild, who implicitly holds every permission
    ///
    /// # Returns
    /// - `MemberProfile` - Profile with the union of `@everyone` and assigned role permissions
    pub fn from_member(
        member: &Member,
        guild_roles: &HashMap<RoleId, Role>,
        owner_id: UserId,
    ) -> Self {
        Self {
            user_id: member.user.id.get(),
            display_name: member.user.tag(),
            roles: member.roles.iter().map(|id| id.get()).collect(),
            permissions: resolve_permissions(member, guild_roles, owner_id),
            bot: member.user.bot,
        }
    }

    pub fn has_any_role(&self, roles: &HashSet<u64>) -> bool {
        !self.roles.is_disjoint(roles)
    }
}

fn resolve_permissions(
    member: &Member,
    guild_roles: &HashMap<RoleId, Role>,
    owner_id: UserId,
) -> Permissions {
    if member.user.id == owner_id {
        return Permissions::all();
    }

    // @everyone shares the guild's id
    let everyone = RoleId::new(member.guild_id.get());

    std::iter::once(&everyone)
        .chain(member.roles.iter())
        .filter_map(|id| guild_roles.get(id))
        .fold(Permissions::empty(), |acc, role| acc | role.permissions)
}
