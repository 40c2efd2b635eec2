//! Invite usage models for referral attribution.

use serenity::all::RichInvite;

use crate::model::member::UserInfo;

/// Use count of one invite code at the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteUsage {
    pub code: String,
    pub uses: u64,
    pub inviter: Option<UserInfo>,
}

impl From<&RichInvite> for InviteUsage {
    fn from(invite: &RichInvite) -> Self {
        Self {
            code: invite.code.clone(),
            uses: u64::from(invite.uses),
            inviter: invite.inviter.as_ref().map(UserInfo::from),
        }
    }
}

/// Outcome of diffing a fresh invite list against the stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralAttribution {
    /// The credited invite, the last candidate in fetch order.
    pub invite: InviteUsage,
    /// How many codes increased in this diff. More than one means the credit is a guess.
    pub candidates: usize,
}
