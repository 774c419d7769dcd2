//! Raw configuration data types
//!
//! [`FileConfig`] mirrors the flat keys accepted in TOML files and
//! `SMARTLEAD_*` environment variables. [`GatewayConfig`] is the validated
//! form the rest of the program runs on.

use smartlead_application::config::{RetryPolicy, RetryPolicyError};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default remote API base URL
pub const DEFAULT_API_URL: &str = "https://server.smartlead.ai/api/v1";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "SMARTLEAD_API_KEY is not set. Export it, or set api_key in ./smartlead.toml or the global config file"
    )]
    MissingApiKey,

    #[error("api_url cannot be empty")]
    EmptyApiUrl,

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(#[from] RetryPolicyError),

    #[error("Failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

/// Raw configuration as merged from defaults, files and environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Credential attached to every remote call
    #[serde(deserialize_with = "key_text")]
    pub api_key: Option<String>,
    pub api_url: String,
    pub retry_max_attempts: u32,
    /// Milliseconds
    pub retry_initial_delay: u64,
    /// Milliseconds
    pub retry_max_delay: u64,
    pub retry_backoff_factor: f64,
    /// Per-request timeout in seconds (no timeout when unset)
    pub timeout_seconds: Option<u64>,
    /// Write side-channel logs here instead of stderr
    pub log_file: Option<String>,
}

/// Read a credential as text even when its source typed it as a number.
///
/// Figment parses `SMARTLEAD_API_KEY=1234567890` into an integer.
fn key_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct KeyTextVisitor;

    impl<'de> Visitor<'de> for KeyTextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or an integer")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, inner: D2) -> Result<Self::Value, D2::Error> {
            inner.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    deserializer.deserialize_option(KeyTextVisitor)
}

impl Default for FileConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            retry_max_attempts: retry.max_attempts,
            retry_initial_delay: retry.initial_delay_ms,
            retry_max_delay: retry.max_delay_ms,
            retry_backoff_factor: retry.backoff_factor,
            timeout_seconds: None,
            log_file: None,
        }
    }
}

impl FileConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(self.retry_max_attempts)
            .with_initial_delay_ms(self.retry_initial_delay)
            .with_max_delay_ms(self.retry_max_delay)
            .with_backoff_factor(self.retry_backoff_factor)
    }

    /// Validate and convert into the runtime configuration.
    pub fn into_gateway_config(self) -> Result<GatewayConfig, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or(ConfigError::MissingApiKey)?;

        if self.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.timeout_seconds == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }

        let retry = self.retry_policy();
        retry.validate()?;

        Ok(GatewayConfig {
            api_key,
            api_url: self.api_url.trim().trim_end_matches('/').to_string(),
            retry,
            timeout: self.timeout_seconds.map(Duration::from_secs),
            log_file: self.log_file.map(PathBuf::from),
        })
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: String,
    /// Base URL without a trailing slash
    pub api_url: String,
    pub retry: RetryPolicy,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
}
