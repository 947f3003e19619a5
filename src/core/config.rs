//! # Retry configuration.
//!
//! Provides [`RetryConfig`], the immutable settings a wrapper is created with.
//!
//! Config is used in two ways:
//! 1. **Wrapper factories**: `make_retry_wrapper(config).wrap(f)` / `make_async_retry_wrapper(config).wrap(f)`
//! 2. **Direct wrapping**: `config.wrap(f)` / `config.wrap_async(f)`
//!
//! ## Sentinel values
//! - `sleep_time = 0s` → no delay between attempts (see [`RetryConfig::delay`])

use std::time::Duration;

use crate::{
    core::builder::RetryConfigBuilder,
    error::ConfigError,
    policies::NonRetrySet,
    wrappers::{AsyncRetry, BlockingRetry},
};

/// Configuration for a retry wrapper.
///
/// ## Field semantics
/// - `max_retries`: total number of attempts (not extra retries), at least 1
/// - `sleep_time`: delay between a failed attempt and the next one (`0s` = none)
/// - `raises_on_exception`: when `false`, failures are swallowed and exhaustion yields `Ok(None)`
/// - `non_retry`: failure kinds that propagate immediately
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use retrykit::{NonRetrySet, RetryConfig};
///
/// let cfg = RetryConfig::default();
/// assert_eq!(cfg.max_retries(), 3);
/// assert!(cfg.delay().is_none());
///
/// let cfg = RetryConfig::new(5, Duration::from_millis(250), true, NonRetrySet::from(["bad_request"]))?;
/// assert_eq!(cfg.delay(), Some(Duration::from_millis(250)));
/// # Ok::<(), retrykit::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    max_retries: u32,
    sleep_time: Duration,
    raises_on_exception: bool,
    non_retry: NonRetrySet,
}

impl RetryConfig {
    /// Creates a validated configuration.
    ///
    /// ### Errors
    /// - [`ConfigError::ZeroAttempts`] when `max_retries == 0`
    pub fn new(
        max_retries: u32,
        sleep_time: Duration,
        raises_on_exception: bool,
        non_retry: NonRetrySet,
    ) -> Result<Self, ConfigError> {
        if max_retries == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            max_retries,
            sleep_time,
            raises_on_exception,
            non_retry,
        })
    }

    /// Returns a builder seeded with the defaults.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Total number of attempts allowed.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Configured delay between attempts (may be zero).
    pub fn sleep_time(&self) -> Duration {
        self.sleep_time
    }

    pub fn raises_on_exception(&self) -> bool {
        self.raises_on_exception
    }

    pub fn non_retry(&self) -> &NonRetrySet {
        &self.non_retry
    }

    /// Returns the inter-attempt delay as an `Option`.
    ///
    /// - `None` → no delay
    /// - `Some(d)` → wait `d` before the next attempt
    #[inline]
    pub fn delay(&self) -> Option<Duration> {
        if self.sleep_time == Duration::ZERO {
            None
        } else {
            Some(self.sleep_time)
        }
    }

    /// Returns `true` if `attempt` (0-based) is the last one allowed.
    #[inline]
    pub(crate) fn is_last_attempt(&self, attempt: u32) -> bool {
        attempt == self.max_retries - 1
    }

    /// Wraps a blocking unit of work with this configuration.
    pub fn wrap<F>(self, f: F) -> BlockingRetry<F> {
        BlockingRetry::new(self, f)
    }

    /// Wraps an async unit of work with this configuration.
    pub fn wrap_async<F>(self, f: F) -> AsyncRetry<F> {
        AsyncRetry::new(self, f)
    }
}

impl Default for RetryConfig {
    /// Default configuration:
    ///
    /// - `max_retries = 3`
    /// - `sleep_time = 0s` (no delay)
    /// - `raises_on_exception = true`
    /// - `non_retry` empty
    fn default() -> Self {
        Self {
            max_retries: 3,
            sleep_time: Duration::ZERO,
            raises_on_exception: true,
            non_retry: NonRetrySet::new(),
        }
    }
}
