/// One participant on a private leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    pub id: u64,
    pub name: String, // empty when the user is anonymous
    pub score: i64,   // "local_score" in the API
    pub stars: i64,
}

impl Member {
    /// Composite ranking key: score plus stars, widened so it cannot overflow
    pub fn total(&self) -> i128 {
        i128::from(self.score) + i128::from(self.stars)
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// A single snapshot of the leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    pub members: Vec<Member>,
}

impl Leaderboard {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Sort members by score + stars, highest first.
    ///
    /// The sort is stable, so members with the same total keep the order
    /// they had before the call.
    pub fn sort_by_highest_score_and_stars(&mut self) {
        self.members.sort_by(|a, b| b.total().cmp(&a.total()));
    }

    /// Positional comparison used to decide whether a new post is warranted.
    ///
    /// Two snapshots are equal when they have the same length and every rank
    /// holds a member with the same name and score. Stars are ignored, and a
    /// reshuffle of otherwise unchanged members counts as a change.
    pub fn is_equal_to(&self, other: &Leaderboard) -> bool {
        if self.members.len() != other.members.len() {
            return false;
        }
        self.members
            .iter()
            .zip(&other.members)
            .all(|(a, b)| a.score == b.score && a.name == b.name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
