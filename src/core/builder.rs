use std::time::Duration;

use crate::{core::config::RetryConfig, error::ConfigError, policies::NonRetrySet};

/// How the delay was supplied; seconds are validated on `build`.
#[derive(Clone, Copy, Debug)]
enum Sleep {
    Exact(Duration),
    Secs(f64),
}

/// Builder for [`RetryConfig`].
///
/// Starts from [`RetryConfig::default`]; every setter overrides one field.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use retrykit::RetryConfig;
///
/// let cfg = RetryConfig::builder()
///     .max_retries(5)
///     .sleep_secs(0.25)
///     .non_retry("bad_request")
///     .build()?;
///
/// assert_eq!(cfg.sleep_time(), Duration::from_millis(250));
/// assert!(cfg.non_retry().contains("bad_request"));
/// # Ok::<(), retrykit::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RetryConfigBuilder {
    max_retries: u32,
    sleep: Sleep,
    raises_on_exception: bool,
    non_retry: NonRetrySet,
}

impl RetryConfigBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        let defaults = RetryConfig::default();
        Self {
            max_retries: defaults.max_retries(),
            sleep: Sleep::Exact(defaults.sleep_time()),
            raises_on_exception: defaults.raises_on_exception(),
            non_retry: defaults.non_retry().clone(),
        }
    }

    /// Sets the total number of attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay between attempts.
    pub fn sleep_time(mut self, sleep_time: Duration) -> Self {
        self.sleep = Sleep::Exact(sleep_time);
        self
    }

    /// Sets the delay between attempts in (fractional) seconds.
    ///
    /// Negative, NaN and infinite values are rejected by [`build`](Self::build).
    pub fn sleep_secs(mut self, secs: f64) -> Self {
        self.sleep = Sleep::Secs(secs);
        self
    }

    /// Chooses whether failures propagate (`true`) or are swallowed (`false`).
    pub fn raises_on_exception(mut self, raises: bool) -> Self {
        self.raises_on_exception = raises;
        self
    }

    /// Adds one kind to the non-retry set.
    pub fn non_retry(mut self, kind: &'static str) -> Self {
        self.non_retry.insert(kind);
        self
    }

    /// Adds several kinds to the non-retry set.
    pub fn non_retry_kinds<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.non_retry.extend(kinds);
        self
    }

    /// Validates the settings and returns the configuration.
    ///
    /// ### Errors
    /// - [`ConfigError::ZeroAttempts`] when `max_retries == 0`
    /// - [`ConfigError::InvalidSleepTime`] when seconds are negative or non-finite
    pub fn build(self) -> Result<RetryConfig, ConfigError> {
        let sleep_time = match self.sleep {
            Sleep::Exact(d) => d,
            Sleep::Secs(secs) => Duration::try_from_secs_f64(secs)
                .map_err(|_| ConfigError::InvalidSleepTime { secs })?,
        };
        RetryConfig::new(
            self.max_retries,
            sleep_time,
            self.raises_on_exception,
            self.non_retry,
        )
    }
}

impl Default for RetryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
