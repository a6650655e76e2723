use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use super::{LeaderboardSource, Notifier};
use crate::error::TransportError;

/// Overall per-request budget when the config does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("podium/", env!("CARGO_PKG_VERSION"));

/// Create the shared HTTP client with an overall request timeout
pub fn create_http_client(timeout: Duration) -> Result<Client, TransportError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Private leaderboard endpoint, authenticated with a session cookie
#[derive(Clone)]
pub struct LeaderboardApi {
    client: Client,
    url: String,
    session: String,
}

impl LeaderboardApi {
    pub fn new(client: Client, url: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            session: session.into(),
        }
    }
}

impl std::fmt::Debug for LeaderboardApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardApi")
            .field("url", &self.url)
            .field("session", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl LeaderboardSource for LeaderboardApi {
    async fn fetch_raw_leaderboard(&self) -> Result<String, TransportError> {
        tracing::debug!(url = %self.url, "fetching leaderboard");

        let response = self
            .client
            .get(&self.url)
            .header(header::COOKIE, format!("session={}", self.session))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        tracing::debug!(bytes = body.len(), "leaderboard fetched");
        Ok(body)
    }
}

/// Slack incoming webhook payload
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    client: Client,
    url: String,
}

impl SlackWebhook {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    async fn deliver(&self, text: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // The webhook URL embeds the secret, keep it out of the error
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: "<webhook>".to_string(),
            });
        }

        tracing::debug!("webhook accepted message");
        Ok(())
    }
}
