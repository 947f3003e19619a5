//! # Retry decision for a failed attempt.
//!
//! [`decide`] looks at one caught failure, the 0-based index of the attempt that
//! produced it, and the [`RetryConfig`], and says whether to retry or propagate.
//!
//! ## Precedence
//! ```text
//! raises_on_exception == false          → Retry   (nothing else is evaluated)
//! attempt == max_retries - 1            → Raise(Exhausted)
//! non_retry non-empty && matches(fail)  → Raise(NonRetryable)
//! otherwise                             → Retry
//! ```
//!
//! With `raises_on_exception == false` even a non-retryable failure is swallowed,
//! and the wrapper ends with no value and no error once attempts run out.

use crate::{core::RetryConfig, policies::kind::FailureKind};

/// Why a failure is propagated instead of retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaiseReason {
    /// The failed attempt was the last one allowed.
    Exhausted,
    /// The failure's kind is in the non-retry set.
    NonRetryable,
}

impl RaiseReason {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RaiseReason::Exhausted => "exhausted",
            RaiseReason::NonRetryable => "non_retryable",
        }
    }
}

/// Outcome of [`decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Swallow the failure and continue with the next attempt (if any).
    Retry,
    /// Hand the failure back to the caller now.
    Raise(RaiseReason),
}

impl Decision {
    #[inline]
    pub fn is_raise(&self) -> bool {
        matches!(self, Decision::Raise(_))
    }
}

/// Decides what to do with `failure`, caught at 0-based `attempt`.
///
/// Pure: no side effects, no clock, no logging.
///
/// # Example
/// ```
/// use retrykit::{Decision, FailureKind, RaiseReason, RetryConfig, decide};
///
/// struct Oops;
/// impl FailureKind for Oops {
///     fn kind(&self) -> &'static str { "oops" }
/// }
///
/// let cfg = RetryConfig::default(); // 3 attempts
/// assert_eq!(decide(&Oops, 0, &cfg), Decision::Retry);
/// assert_eq!(decide(&Oops, 2, &cfg), Decision::Raise(RaiseReason::Exhausted));
/// ```
pub fn decide<E: FailureKind + ?Sized>(failure: &E, attempt: u32, config: &RetryConfig) -> Decision {
    if !config.raises_on_exception() {
        return Decision::Retry;
    }
    if config.is_last_attempt(attempt) {
        return Decision::Raise(RaiseReason::Exhausted);
    }
    let non_retry = config.non_retry();
    if !non_retry.is_empty() && non_retry.matches(failure) {
        return Decision::Raise(RaiseReason::NonRetryable);
    }
    Decision::Retry
}

/// Returns `true` when `failure` must be propagated to the caller now.
///
/// Shorthand for `decide(..).is_raise()`.
#[inline]
pub fn should_raise<E: FailureKind + ?Sized>(failure: &E, attempt: u32, config: &RetryConfig) -> bool {
    decide(failure, attempt, config).is_raise()
}
