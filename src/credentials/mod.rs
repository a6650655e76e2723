use std::fmt;

use crate::config::Config;

/// Environment variable holding the Advent of Code `session` cookie value
pub const ENV_SESSION_VAR: &str = "PODIUM_SESSION";

/// Environment variable overriding `webhook_url` from the config file
pub const ENV_WEBHOOK_VAR: &str = "PODIUM_WEBHOOK_URL";

#[derive(Debug, PartialEq, Eq)]
pub enum CredentialError {
    SessionNotFound,
    WebhookNotFound,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::SessionNotFound => write!(
                f,
                "Session cookie not found. Set {} to your adventofcode.com session cookie",
                ENV_SESSION_VAR
            ),
            CredentialError::WebhookNotFound => write!(
                f,
                "Webhook URL not found. Set {} or webhook_url in the config file",
                ENV_WEBHOOK_VAR
            ),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Trim a secret, treating blank values as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the session cookie from PODIUM_SESSION
pub fn get_session_from_env() -> Result<String, CredentialError> {
    resolve_session(std::env::var(ENV_SESSION_VAR).ok())
}

/// Resolve the webhook URL: PODIUM_WEBHOOK_URL first, then the config file
pub fn get_webhook_url(config: &Config) -> Result<String, CredentialError> {
    resolve_webhook(std::env::var(ENV_WEBHOOK_VAR).ok(), config)
}

fn resolve_session(env_value: Option<String>) -> Result<String, CredentialError> {
    non_empty(env_value).ok_or(CredentialError::SessionNotFound)
}

fn resolve_webhook(env_value: Option<String>, config: &Config) -> Result<String, CredentialError> {
    non_empty(env_value)
        .or_else(|| non_empty(config.webhook_url.clone()))
        .ok_or(CredentialError::WebhookNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_webhook(webhook_url: Option<&str>) -> Config {
        Config {
            leaderboard_url: "https://example.com/lb.json".to_string(),
            webhook_url: webhook_url.map(String::from),
            header: None,
            timeout: None,
            poll_interval: None,
        }
    }

    #[test]
    fn test_session_trimmed() {
        assert_eq!(resolve_session(Some("  abc \n".to_string())).unwrap(), "abc");
    }

    #[test]
    fn test_session_missing_or_blank() {
        assert_eq!(resolve_session(None), Err(CredentialError::SessionNotFound));
        assert_eq!(
            resolve_session(Some("   ".to_string())),
            Err(CredentialError::SessionNotFound)
        );
    }

    #[test]
    fn test_webhook_env_overrides_config() {
        let config = config_with_webhook(Some("https://from-config"));
        let url = resolve_webhook(Some("https://from-env".to_string()), &config).unwrap();
        assert_eq!(url, "https://from-env");
    }

    #[test]
    fn test_webhook_falls_back_to_config() {
        let config = config_with_webhook(Some("https://from-config"));
        assert_eq!(resolve_webhook(None, &config).unwrap(), "https://from-config");
        assert_eq!(
            resolve_webhook(Some(String::new()), &config).unwrap(),
            "https://from-config"
        );
    }

    #[test]
    fn test_webhook_missing() {
        let config = config_with_webhook(None);
        assert_eq!(
            resolve_webhook(None, &config),
            Err(CredentialError::WebhookNotFound)
        );
    }

    #[test]
    fn test_error_messages_name_env_vars() {
        assert!(CredentialError::SessionNotFound
            .to_string()
            .contains(ENV_SESSION_VAR));
        assert!(CredentialError::WebhookNotFound
            .to_string()
            .contains(ENV_WEBHOOK_VAR));
    }
}
