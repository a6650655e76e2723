use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_url("leaderboard_url", &config.leaderboard_url, &mut errors);
    if let Some(ref url) = config.webhook_url {
        check_url("webhook_url", url, &mut errors);
    }

    check_duration("timeout", config.timeout.as_deref(), &mut errors);
    check_duration("poll_interval", config.poll_interval.as_deref(), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &str, url: &str, errors: &mut Vec<String>) {
    let url = url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("{}: must be an http(s) URL, got '{}'", field, url));
    }
}

fn check_duration(field: &str, value: Option<&str>, errors: &mut Vec<String>) {
    let Some(value) = value else {
        return;
    };
    match humantime::parse_duration(value.trim()) {
        Ok(d) if d.is_zero() => errors.push(format!("{}: must be greater than zero", field)),
        Ok(_) => {}
        Err(e) => errors.push(format!("{}: invalid duration '{}' - {}", field, value, e)),
    }
}
