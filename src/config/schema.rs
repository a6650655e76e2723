use serde::Deserialize;
use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;
use crate::output::DEFAULT_HEADER;

/// Advent of Code asks automated clients to poll no more than every 15 minutes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// leaderboard_url: https://adventofcode.com/2023/leaderboard/private/view/395034.json
/// webhook_url: https://hooks.slack.com/services/T000/B000/XXXX
/// header: "Noen har klart en ny oppgave! Ny poengoversikt:"
/// timeout: 10s
/// poll_interval: 15m
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON endpoint of the private leaderboard
    pub leaderboard_url: String,

    /// Slack incoming webhook. PODIUM_WEBHOOK_URL takes precedence.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// First line of every posted message
    #[serde(default)]
    pub header: Option<String>,

    /// Per-request timeout, humantime format (e.g. "10s")
    #[serde(default)]
    pub timeout: Option<String>,

    /// Delay between polls in `watch` mode, humantime format (e.g. "15m")
    #[serde(default)]
    pub poll_interval: Option<String>,
}

impl Config {
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or(DEFAULT_HEADER)
    }

    /// Request timeout, falling back to the default when unset or unparsable.
    /// `validate_config` rejects unparsable values at startup.
    pub fn timeout(&self) -> Duration {
        parse_or(self.timeout.as_deref(), DEFAULT_TIMEOUT)
    }

    pub fn poll_interval(&self) -> Duration {
        parse_or(self.poll_interval.as_deref(), DEFAULT_POLL_INTERVAL)
    }
}

fn parse_or(value: Option<&str>, default: Duration) -> Duration {
    value
        .and_then(|v| humantime::parse_duration(v.trim()).ok())
        .unwrap_or(default)
}
