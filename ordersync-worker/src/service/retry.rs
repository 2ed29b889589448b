//! Retry policy
//!
//! Decides how many times a detail fetch may be attempted and how long to
//! wait after each failure. The default policy waits the same fixed delay
//! after every failure; the exponential variant doubles a ceiling up to a cap
//! and waits a uniformly random time below it (full jitter).

use std::time::Duration;

use rand::Rng;

/// Default number of attempts per detail fetch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Default delay after a failed attempt
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Default ceiling for exponential backoff
pub const DEFAULT_MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// How the delay evolves between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay after every failure
    Fixed,

    /// Random delay below a ceiling that doubles after each failure,
    /// never exceeding `max_delay`
    Exponential { max_delay: Duration },
}

impl std::str::FromStr for Backoff {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Backoff::Fixed),
            "exponential" => Ok(Backoff::Exponential {
                max_delay: DEFAULT_MAX_RETRY_DELAY,
            }),
            other => Err(format!("unknown backoff '{}'", other)),
        }
    }
}

/// Attempt budget and delay schedule for detail fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,

    /// Delay after the first failure
    pub delay: Duration,

    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Fixed-delay policy
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            backoff: Backoff::Fixed,
        }
    }

    /// Longest delay allowed after failed attempt number `attempt` (1-based)
    pub fn ceiling_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential { max_delay } => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.delay.saturating_mul(factor).min(max_delay)
            }
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let ceiling = self.ceiling_after(attempt);
        match self.backoff {
            Backoff::Fixed => ceiling,
            Backoff::Exponential { .. } => {
                let nanos = u64::try_from(ceiling.as_nanos()).unwrap_or(u64::MAX);
                Duration::from_nanos(rand::thread_rng().gen_range(0..=nanos))
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}
