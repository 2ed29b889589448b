//! Worker configuration
//!
//! Defines the tunable parameters of the sync loop: where the order API
//! lives, how often it is polled, the value threshold, and the retry
//! policy for detail fetches. Defaults reproduce the stock behavior.

use std::time::Duration;

use ordersync_client::DEFAULT_BASE_URL;
use ordersync_core::domain::order::HIGH_VALUE_THRESHOLD;

use crate::service::retry::{Backoff, DEFAULT_MAX_RETRY_DELAY, RetryPolicy};

/// Default pause between cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Order API base URL (e.g., "https://api.example.com")
    pub api_url: String,

    /// Pause after each cycle before polling again
    pub poll_interval: Duration,

    /// Orders whose total strictly exceeds this are fetched in detail
    pub threshold: f64,

    /// Attempt budget and delays for detail fetches
    pub retry: RetryPolicy,

    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration with defaults for everything but the URL
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            threshold: HIGH_VALUE_THRESHOLD,
            retry: RetryPolicy::default(),
            request_timeout: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables (all optional):
    /// - ORDERSYNC_API_URL (default: https://api.example.com)
    /// - ORDERSYNC_POLL_INTERVAL_MS (default: 1000)
    /// - ORDERSYNC_THRESHOLD (default: 1000)
    /// - ORDERSYNC_MAX_ATTEMPTS (default: 8)
    /// - ORDERSYNC_RETRY_DELAY_MS (default: 50)
    /// - ORDERSYNC_BACKOFF (`fixed` or `exponential`, default: fixed)
    /// - ORDERSYNC_MAX_RETRY_DELAY_MS (default: 30000, exponential only)
    /// - ORDERSYNC_REQUEST_TIMEOUT_SECS (default: unset)
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let api_url = lookup("ORDERSYNC_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(api_url);

        if let Some(ms) = parsed("ORDERSYNC_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(ms);
        }

        if let Some(threshold) =
            lookup("ORDERSYNC_THRESHOLD").and_then(|s| s.trim().parse::<f64>().ok())
        {
            config.threshold = threshold;
        }

        if let Some(attempts) = parsed("ORDERSYNC_MAX_ATTEMPTS") {
            config.retry.max_attempts = u32::try_from(attempts).unwrap_or(u32::MAX);
        }

        if let Some(ms) = parsed("ORDERSYNC_RETRY_DELAY_MS") {
            config.retry.delay = Duration::from_millis(ms);
        }

        if let Some(backoff) = lookup("ORDERSYNC_BACKOFF").and_then(|s| s.parse::<Backoff>().ok()) {
            config.retry.backoff = match backoff {
                Backoff::Fixed => Backoff::Fixed,
                Backoff::Exponential { .. } => Backoff::Exponential {
                    max_delay: parsed("ORDERSYNC_MAX_RETRY_DELAY_MS")
                        .map(Duration::from_millis)
                        .unwrap_or(DEFAULT_MAX_RETRY_DELAY),
                },
            };
        }

        config.request_timeout =
            parsed("ORDERSYNC_REQUEST_TIMEOUT_SECS").map(Duration::from_secs);

        config
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if !self.threshold.is_finite() || self.threshold < 0.0 {
            anyhow::bail!("threshold must be a finite, non-negative number");
        }

        if self.retry.max_attempts == 0 {
            anyhow::bail!("max_attempts must be greater than 0");
        }

        if matches!(self.request_timeout, Some(t) if t.is_zero()) {
            anyhow::bail!("request_timeout must be greater than 0 when set");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}
