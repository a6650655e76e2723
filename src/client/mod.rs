//! Outbound capabilities of the pipeline
//!
//! The pipeline only needs two things from the network: the raw leaderboard
//! document and a way to deliver the finished message. Both are traits so
//! tests can swap in the in-memory doubles from `mock`.

pub mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::TransportError;

pub use http::{create_http_client, LeaderboardApi, SlackWebhook, DEFAULT_TIMEOUT};

/// Source of the raw leaderboard JSON
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_raw_leaderboard(&self) -> Result<String, TransportError>;
}

/// Destination for the formatted report
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Wrap `text` in the channel's payload envelope and send it
    async fn deliver(&self, text: &str) -> Result<(), TransportError>;
}
