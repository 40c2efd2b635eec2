/// One ranked row of the engagement or referral ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub display_name: String,
    pub value: u64,
}

impl LeaderboardEntry {
    /// Sorts entries highest value first, ties broken by ascending user id.
    pub fn rank(entries: &mut [LeaderboardEntry]) {
        entries.sort_by(|a, b| b.value.cmp(&a.value).then(a.user_id.cmp(&b.user_id)));
    }
}
