use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::provider::DEFAULT_TIMEOUT;

/// Application configuration loaded from environment variables.
/// Hosted providers are optional; without them generation uses templates only.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origin used to classify links as internal when a request gives none.
    pub site_origin: String,
    pub primary_provider_url: Option<String>,
    pub primary_provider_timeout: Duration,
    pub secondary_provider_url: Option<String>,
    pub secondary_provider_api_key: Option<String>,
    pub secondary_provider_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            site_origin: optional_env("SITE_ORIGIN")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            primary_provider_url: optional_env("PRIMARY_PROVIDER_URL"),
            primary_provider_timeout: timeout_env("PRIMARY_PROVIDER_TIMEOUT_SECS")?,
            secondary_provider_url: optional_env("SECONDARY_PROVIDER_URL"),
            secondary_provider_api_key: optional_env("SECONDARY_PROVIDER_API_KEY"),
            secondary_provider_timeout: timeout_env("SECONDARY_PROVIDER_TIMEOUT_SECS")?,
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn timeout_env(key: &str) -> Result<Duration> {
    parse_timeout(key, optional_env(key).as_deref())
}

fn parse_timeout(key: &str, value: Option<&str>) -> Result<Duration> {
    match value {
        None => Ok(DEFAULT_TIMEOUT),
        Some(v) => {
            let secs = v
                .parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of seconds"))?;
            anyhow::ensure!(secs > 0, "{key} must be greater than zero");
            Ok(Duration::from_secs(secs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_thirty_seconds() {
        assert_eq!(parse_timeout("T", None).unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_parses_seconds() {
        assert_eq!(parse_timeout("T", Some("45")).unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn test_invalid_timeout_names_variable() {
        let err = parse_timeout("SECONDARY_PROVIDER_TIMEOUT_SECS", Some("soon")).unwrap_err();
        assert!(err.to_string().contains("SECONDARY_PROVIDER_TIMEOUT_SECS"));
        assert!(parse_timeout("T", Some("0")).is_err());
    }
}
