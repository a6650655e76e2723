//! Test doubles for the client traits
//!
//! In-memory implementations that record what the pipeline did, plus a tiny
//! one-shot HTTP server for exercising the reqwest-backed clients.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::{create_http_client, LeaderboardSource, Notifier};
use crate::error::TransportError;

/// Five-member document in the shape the private leaderboard API returns
pub const SAMPLE_LEADERBOARD_JSON: &str = r#"
{
  "members": {
    "395": {
      "global_score": 0,
      "completion_day_level": {},
      "id": 395,
      "last_star_ts": 0,
      "local_score": 50,
      "stars": 5,
      "name": "alice"
    },
    "236": {
      "local_score": 50,
      "completion_day_level": {},
      "id": 236,
      "last_star_ts": 0,
      "global_score": 0,
      "name": "bob",
      "stars": 6
    },
    "198": {
      "local_score": 20,
      "completion_day_level": {},
      "id": 198,
      "last_star_ts": 0,
      "global_score": 0,
      "name": "charlie",
      "stars": 2
    },
    "325": {
      "local_score": 20,
      "completion_day_level": {},
      "id": 325,
      "last_star_ts": 0,
      "global_score": 0,
      "name": "david",
      "stars": 3
    },
    "523": {
      "local_score": 1,
      "completion_day_level": {},
      "id": 523,
      "last_star_ts": 0,
      "global_score": 0,
      "name": null,
      "stars": 0
    }
  },
  "owner_id": 395,
  "event": "2023"
}"#;

/// Source that hands out queued responses in order.
/// `None` entries simulate a failed request (HTTP 500).
#[derive(Default)]
pub struct QueuedSource {
    responses: Mutex<VecDeque<Option<String>>>,
}

impl QueuedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Some(body.into()));
        self
    }

    pub fn with_failure(self) -> Self {
        self.responses.lock().unwrap().push_back(None);
        self
    }
}

#[async_trait]
impl LeaderboardSource for QueuedSource {
    async fn fetch_raw_leaderboard(&self) -> Result<String, TransportError> {
        match self.responses.lock().unwrap().pop_front() {
            Some(Some(body)) => Ok(body),
            _ => Err(TransportError::Status {
                status: 500,
                url: "mock://leaderboard".to_string(),
            }),
        }
    }
}

/// Source whose fetch never completes
pub struct HangingSource;

#[async_trait]
impl LeaderboardSource for HangingSource {
    async fn fetch_raw_leaderboard(&self) -> Result<String, TransportError> {
        std::future::pending().await
    }
}

/// Notifier that records every delivered message
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, text: &str) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::Status {
                status: 403,
                url: "<webhook>".to_string(),
            });
        }
        self.delivered.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// HTTP client for tests, with the rustls crypto provider installed
pub fn test_http_client(timeout: Duration) -> reqwest::Client {
    let _ = rustls::crypto::ring::default_provider().install_default();
    create_http_client(timeout).unwrap()
}

/// Accept a single HTTP request on a random local port and answer it with
/// `status` and `body`. Returns the base URL and a handle resolving to the
/// raw request text.
pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {} Mock\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}
