use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::invite::InviteUsage;

/// Last observed use count per invite code.
pub type InviteCounts = HashMap<String, u64>;

/// Per-guild invite usage snapshots used to infer which invite a new member used.
///
/// Use counts are monotonic per code: when a fetched count is lower than the stored one
/// the fetch is treated as stale and the stored count is kept.
#[derive(Clone, Default)]
pub struct InviteSnapshotStore {
    guilds: Arc<RwLock<HashMap<u64, InviteCounts>>>,
}

impl InviteSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the guild's snapshot, empty if none was ever loaded.
    pub async fn get(&self, guild_id: u64) -> InviteCounts {
        self.guilds
            .read()
            .await
            .get(&guild_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replaces the guild's snapshot with a freshly fetched invite list.
    ///
    /// Codes missing from `invites` are dropped (deleted or expired invites). Codes present
    /// in both keep the higher of the stored and fetched counts.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `invites` - Complete invite list of the guild as just fetched
    pub async fn replace(&self, guild_id: u64, invites: &[InviteUsage]) {
        let mut guilds = self.guilds.write().await;
        let stored = guilds.remove(&guild_id).unwrap_or_default();

        let fresh = invites
            .iter()
            .map(|invite| {
                let uses = match stored.get(&invite.code) {
                    Some(&known) if known > invite.uses => {
                        tracing::debug!(
                            "Invite {} in guild {} reported {} uses, keeping {}",
                            invite.code,
                            guild_id,
                            invite.uses,
                            known
                        );
                        known
                    }
                    _ => invite.uses,
                };
                (invite.code.clone(), uses)
            })
            .collect();

        guilds.insert(guild_id, fresh);
    }

    /// Inserts or raises the count of a single invite code.
    pub async fn upsert(&self, guild_id: u64, code: &str, uses: u64) {
        let mut guilds = self.guilds.write().await;
        let counts = guilds.entry(guild_id).or_default();
        let entry = counts.entry(code.to_string()).or_insert(uses);
        *entry = (*entry).max(uses);
    }
}
