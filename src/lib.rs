//! Rank an Advent of Code private leaderboard and post it to Slack.
//!
//! The pipeline is `fetch::fetch_leaderboard` (raw JSON -> ranked
//! `Leaderboard`) followed by `output::format_message` and a
//! `client::Notifier`.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod leaderboard;
pub mod logging;
pub mod output;

pub use error::{DecodeError, Error, TransportError};
pub use leaderboard::{Leaderboard, Member};
