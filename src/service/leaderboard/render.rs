//! Leaderboard text rendering.

use std::fmt::Write;

use crate::model::leaderboard::LeaderboardEntry;

/// Number of ranked rows shown per section.
pub const LEADERBOARD_SIZE: usize = 10;

const TITLE: &str = "🏆 **Weekly Community Leaderboards**";
const SUBTITLE: &str =
    "_(Live community view. Official winners are confirmed from analytics each week.)_";
const FOOTER: &str = "🏅 Each week, the top **Engagement Champion** and **Referral Champion** are recognised by the team.";

struct Section<'a> {
    heading: &'a str,
    empty: &'a str,
    unit: &'a str,
}

const ENGAGEMENT: Section<'static> = Section {
    heading: "🔥 **Engagement (non-spammy messages)**",
    empty: "_No engagement data yet._",
    unit: "pts",
};

const REFERRALS: Section<'static> = Section {
    heading: "🔗 **Referrals (members invited)**",
    empty: "_No referral data yet._",
    unit: "joins",
};

/// Renders both leaderboards as a single Discord message.
///
/// Entries may come in any order. Each section is ranked by value, ties broken by
/// ascending member id, and shows at most [`LEADERBOARD_SIZE`] rows. Members are
/// rendered as mentions so the text never goes stale when someone changes their name.
/// Identical inputs always produce identical output.
///
/// # Arguments
/// - `engagement` - Engagement ledger snapshot
/// - `referrals` - Referral ledger snapshot
///
/// # Returns
/// - `String` - Message content
pub fn render(engagement: &[LeaderboardEntry], referrals: &[LeaderboardEntry]) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "{TITLE}");
    let _ = writeln!(text, "{SUBTITLE}");
    text.push('\n');

    render_section(&mut text, &ENGAGEMENT, engagement);
    text.push('\n');
    render_section(&mut text, &REFERRALS, referrals);
    text.push('\n');

    let _ = writeln!(text, "{FOOTER}");

    text
}

fn render_section(text: &mut String, section: &Section<'_>, entries: &[LeaderboardEntry]) {
    let _ = writeln!(text, "{}", section.heading);

    if entries.is_empty() {
        let _ = writeln!(text, "{}", section.empty);
        return;
    }

    let mut ranked = entries.to_vec();
    LeaderboardEntry::rank(&mut ranked);

    for (index, entry) in ranked.iter().take(LEADERBOARD_SIZE).enumerate() {
        let _ = writeln!(
            text,
            "{}. <@{}> — **{} {}**",
            index + 1,
            entry.user_id,
            entry.value,
            section.unit
        );
    }
}
