//! Bot configuration
//!
//! Defines the credentials the bot needs to run plus the tunable
//! parameters of the polling loop and its HTTP clients.

use std::time::Duration;

use homework_client::{PRACTICUM_ENDPOINT, TELEGRAM_API_URL};
use thiserror::Error;

/// Environment variables that must be set and non-empty
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors; all of them are fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset or empty
    #[error("Отсутствуют необходимые токены: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Secrets required to talk to both APIs
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth token for the Practicum API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Pause between the end of one poll cycle and the start of the next
    pub retry_period: Duration,

    /// Full URL of the homework status endpoint
    pub practicum_endpoint: String,

    /// Base URL of the Telegram Bot API
    pub telegram_api_url: String,

    /// Per-request timeout for both HTTP clients
    pub request_timeout: Duration,
}

impl Config {
    /// Creates configuration from a variable source such as the process
    /// environment
    ///
    /// Expected variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    ///
    /// Empty values count as unset; any other value, whitespace included, is
    /// taken as given. Every missing required variable is reported, not just
    /// the first one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let credentials = Credentials {
            practicum_token: get("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: get("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: get("TELEGRAM_CHAT_ID").unwrap_or_default(),
        };

        let seconds = |key: &str, default: Duration| {
            get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        Ok(Self {
            credentials,
            retry_period: seconds("RETRY_PERIOD", DEFAULT_RETRY_PERIOD),
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| TELEGRAM_API_URL.to_string()),
            request_timeout: seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid(
                "retry_period must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
