// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use std::time::Duration;

/// Environment variable holding the data store base URL.
pub const URL_ENV: &str = "SALON_BOOKING_DATA_URL";
/// Environment variable holding the public API key.
pub const KEY_ENV: &str = "SALON_BOOKING_DATA_KEY";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SALON_BOOKING_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for [`crate::RestDataClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the data store, without a trailing slash.
    pub base_url: String,
    /// Public (anonymous) API key sent with every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Data store base URL; a trailing slash is removed
    /// * `api_key` - Public API key
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Returns a copy with a different timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the URL or key is missing, or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the URL or key is missing, or the
    /// timeout is not a whole number of seconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let base_url: String =
            lookup(URL_ENV).ok_or_else(|| ClientError::Config(format!("{URL_ENV} is not set")))?;
        let api_key: String =
            lookup(KEY_ENV).ok_or_else(|| ClientError::Config(format!("{KEY_ENV} is not set")))?;

        let mut config: Self = Self::new(&base_url, &api_key);
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config = config.with_timeout(parse_timeout(&raw)?);
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the URL is not http(s) or the key is empty.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config(String::from("API key is empty")));
        }
        Ok(())
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ClientError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            ClientError::Config(format!(
                "{TIMEOUT_ENV} must be a number of seconds, got '{raw}'"
            ))
        })
}
