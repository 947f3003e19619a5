//! Error types produced by retrykit itself.
//!
//! The wrappers never invent errors of their own: a failing call hands back the
//! wrapped callable's error unchanged. The only error this crate defines is
//! [`ConfigError`], raised while building a [`RetryConfig`](crate::RetryConfig).

use thiserror::Error;

/// # Errors produced while validating a retry configuration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_retries` was zero; at least one attempt is required.
    #[error("max_retries must allow at least one attempt")]
    ZeroAttempts,

    /// Sleep time given in seconds was negative, NaN or infinite.
    #[error("sleep time must be a finite, non-negative number of seconds; got {secs}")]
    InvalidSleepTime {
        /// The rejected value.
        secs: f64,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use retrykit::ConfigError;
    ///
    /// assert_eq!(ConfigError::ZeroAttempts.as_label(), "config_zero_attempts");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::ZeroAttempts => "config_zero_attempts",
            ConfigError::InvalidSleepTime { .. } => "config_invalid_sleep_time",
        }
    }
}
