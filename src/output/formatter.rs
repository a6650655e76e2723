use std::io::IsTerminal;

use crate::leaderboard::{Leaderboard, Member};

/// Header line posted above the ranking
pub const DEFAULT_HEADER: &str = "Noen har klart en ny oppgave! Ny poengoversikt:";

/// Name shown for a member, with a placeholder for anonymous users
pub fn display_name(member: &Member) -> String {
    if member.is_anonymous() {
        format!("Anonym bruker ({})", member.id)
    } else {
        member.name.clone()
    }
}

/// Format a single member as one line of Slack markup
/// Format: "*{name}* Poeng: {score}, :star: {stars}"
pub fn format_member(member: &Member) -> String {
    format!(
        "*{}* Poeng: {}, :star: {}",
        display_name(member),
        member.score,
        member.stars
    )
}

/// Emoji token for a 0-based rank, including the trailing space
fn rank_emoji(index: usize) -> String {
    match index {
        0 => ":first_place_medal: ".to_string(),
        1 => ":second_place_medal: ".to_string(),
        2 => ":third_place_medal: ".to_string(),
        _ => format!(":number-{}: ", index + 1),
    }
}

/// Format the leaderboard as one line per member, in current order.
///
/// Members with a positive score get a rank emoji; members without points
/// are listed bare. Call `sort_by_highest_score_and_stars` first.
pub fn format_leaderboard(leaderboard: &Leaderboard) -> String {
    leaderboard
        .members
        .iter()
        .enumerate()
        .map(|(idx, member)| {
            let emoji = if member.score > 0 {
                rank_emoji(idx)
            } else {
                String::new()
            };
            format!("{}{}", emoji, format_member(member))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full webhook message: header line followed by the ranking
pub fn format_message(header: &str, leaderboard: &Leaderboard) -> String {
    format!("{}\n{}", header, format_leaderboard(leaderboard))
}

/// Announce members who gained points, e.g. "alice, bob og charlie har klatret på pallen!"
/// Returns None when nobody changed.
pub fn format_climbers(members: &[&Member]) -> Option<String> {
    let names: Vec<String> = members.iter().map(|m| display_name(m)).collect();

    let joined = match names.as_slice() {
        [] => return None,
        [only] => only.clone(),
        [rest @ .., last] => format!("{} og {}", rest.join(", "), last),
    };

    Some(format!("{} har klatret på pallen!", joined))
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
