pub mod changes;
pub mod parse;
pub mod types;

pub use changes::changed_members;
pub use parse::parse_leaderboard;
pub use types::{Leaderboard, Member};
