use std::collections::HashMap;

use super::types::{Leaderboard, Member};

/// Members of `current` whose score or stars moved since `previous`.
///
/// Unlike `Leaderboard::is_equal_to` this matches members by id, so a member
/// who only changed rank is not reported. Members missing from `previous`
/// count as changed. Order follows `current`.
pub fn changed_members<'a>(previous: &Leaderboard, current: &'a Leaderboard) -> Vec<&'a Member> {
    let before: HashMap<u64, (i64, i64)> = previous
        .members
        .iter()
        .map(|m| (m.id, (m.score, m.stars)))
        .collect();

    current
        .members
        .iter()
        .filter(|m| before.get(&m.id) != Some(&(m.score, m.stars)))
        .collect()
}
