use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::voice::VoiceSession;

/// Open voice sessions keyed by (guild id, user id).
///
/// Holding at most one value per key enforces the single-open-session invariant.
#[derive(Clone, Default)]
pub struct VoiceSessionStore {
    sessions: Arc<RwLock<HashMap<(u64, u64), VoiceSession>>>,
}

impl VoiceSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically swaps the session for a member.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `session` - The new open session, or `None` to close it
    ///
    /// # Returns
    /// - `Option<VoiceSession>` - The session that was open before, if any
    pub async fn swap(
        &self,
        guild_id: u64,
        user_id: u64,
        session: Option<VoiceSession>,
    ) -> Option<VoiceSession> {
        let mut sessions = self.sessions.write().await;
        match session {
            Some(session) => sessions.insert((guild_id, user_id), session),
            None => sessions.remove(&(guild_id, user_id)),
        }
    }

    #[cfg(test)]
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Option<VoiceSession> {
        self.sessions.read().await.get(&(guild_id, user_id)).copied()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
