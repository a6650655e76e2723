//! Error types for the leaderboard pipeline
//!
//! - `TransportError`: fetch or delivery failed on the wire
//! - `DecodeError`: the leaderboard document could not be parsed
//! - `Error`: either of the above, returned by the pipeline in `fetch.rs`

use thiserror::Error;

/// Network or HTTP failure while talking to the leaderboard API or the webhook
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP request to {url} failed with status code {status}")]
    Status { status: u16, url: String },
}

/// Malformed or structurally incomplete leaderboard document
#[derive(Debug, Error)]
#[error("Failed to decode leaderboard: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
