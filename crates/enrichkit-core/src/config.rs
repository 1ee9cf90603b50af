//! Client configuration.
//!
//! Values come from constructor overrides first and the process environment
//! second. The API key is never logged.

use std::time::Duration;

use crate::error::{EnrichmentError, Result};

pub const API_KEY_ENV: &str = "CLEARBIT_KEY";
pub const TIMEOUT_ENV: &str = "ENRICHKIT_TIMEOUT_MS";
pub const MAX_PAGE_SIZE_ENV: &str = "ENRICHKIT_MAX_PAGE_SIZE";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_millis(1_000);

/// Settings consumed by [`crate::EnrichmentClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_page_size: u32,
    pub poll_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            poll_delay: DEFAULT_POLL_DELAY,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_page_size", &self.max_page_size)
            .field("poll_delay", &self.poll_delay)
            .finish()
    }
}

impl ClientConfig {
    /// Reads `CLEARBIT_KEY`, `ENRICHKIT_TIMEOUT_MS` and `ENRICHKIT_MAX_PAGE_SIZE`.
    ///
    /// Unparseable numeric overrides fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        };

        if let Some(timeout_ms) = read_env_number::<u64>(TIMEOUT_ENV) {
            config.timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(max_page_size) = read_env_number::<u32>(MAX_PAGE_SIZE_ENV) {
            config.max_page_size = max_page_size;
        }

        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_page_size(mut self, max_page_size: u32) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    pub fn with_poll_delay(mut self, poll_delay: Duration) -> Self {
        self.poll_delay = poll_delay;
        self
    }

    /// Returns the API key, failing when it is absent or blank.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(EnrichmentError::missing_api_key()),
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn read_env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_limits() {
        let config = ClientConfig::default();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.poll_delay, Duration::from_secs(1));
        assert_eq!(config.timeout_ms(), 30_000);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let config = ClientConfig::default().with_api_key("   ");
        assert!(matches!(
            config.require_api_key(),
            Err(EnrichmentError::Configuration(_))
        ));
    }

    #[test]
    fn env_numbers_parse_trimmed_and_reject_garbage() {
        std::env::set_var("ENRICHKIT_TEST_NUMBER_OK", " 750 ");
        std::env::set_var("ENRICHKIT_TEST_NUMBER_BAD", "fast");

        assert_eq!(read_env_number::<u64>("ENRICHKIT_TEST_NUMBER_OK"), Some(750));
        assert_eq!(read_env_number::<u64>("ENRICHKIT_TEST_NUMBER_BAD"), None);
        assert_eq!(read_env_number::<u64>("ENRICHKIT_TEST_NUMBER_UNSET"), None);

        std::env::remove_var("ENRICHKIT_TEST_NUMBER_OK");
        std::env::remove_var("ENRICHKIT_TEST_NUMBER_BAD");
    }

    // The only test touching the real variable names, so no other test races it.
    #[test]
    fn from_env_reads_overrides_and_falls_back_on_bad_values() {
        std::env::set_var(API_KEY_ENV, "sk_env");
        std::env::set_var(TIMEOUT_ENV, "1500");
        std::env::set_var(MAX_PAGE_SIZE_ENV, "-3");

        let config = ClientConfig::from_env();

        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(TIMEOUT_ENV);
        std::env::remove_var(MAX_PAGE_SIZE_ENV);

        assert_eq!(config.require_api_key().expect("key from env"), "sk_env");
        assert_eq!(config.timeout_ms(), 1_500);
        assert_eq!(config.max_page_size, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(config.poll_delay, DEFAULT_POLL_DELAY);

        let unset = ClientConfig::from_env();
        assert_eq!(unset.api_key, None);
        assert_eq!(unset.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ClientConfig::default().with_api_key("sk_live_secret");
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("sk_live_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
