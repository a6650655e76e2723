use serde::Deserialize;
use std::collections::HashMap;

use super::types::{Leaderboard, Member};
use crate::error::DecodeError;

/// Wire shape of the private leaderboard endpoint.
/// Only the fields the ranking needs are read; everything else is ignored.
#[derive(Debug, Deserialize)]
struct LeaderboardDocument {
    members: HashMap<String, MemberDocument>,
}

#[derive(Debug, Deserialize)]
struct MemberDocument {
    id: u64,
    #[serde(default)]
    name: Option<String>, // null for anonymous users
    local_score: i64,
    stars: i64,
}

impl From<MemberDocument> for Member {
    fn from(doc: MemberDocument) -> Self {
        Member {
            id: doc.id,
            name: doc.name.unwrap_or_default(),
            score: doc.local_score,
            stars: doc.stars,
        }
    }
}

/// Parse a raw leaderboard document into an unsorted `Leaderboard`.
///
/// The `members` object is keyed by user id, which duplicates the `id` field
/// of each entry, so the keys are dropped. Member order is whatever the map
/// yields; call `sort_by_highest_score_and_stars` before reading ranks.
///
/// # Errors
///
/// Returns `DecodeError` if the input is not valid JSON, or if `members` or
/// a required member field is missing.
pub fn parse_leaderboard(raw: &str) -> Result<Leaderboard, DecodeError> {
    let document: LeaderboardDocument = serde_json::from_str(raw)?;

    let members = document
        .members
        .into_values()
        .map(Member::from)
        .collect();

    Ok(Leaderboard::new(members))
}
