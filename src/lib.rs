//! # retrykit
//!
//! **retrykit** wraps a fallible unit of work so that it is re-executed when it fails,
//! up to a bounded number of attempts.
//!
//! Two shells are provided, both driven by the same decision policy:
//! - [`BlockingRetry`] runs the work on the calling thread and blocks it between attempts.
//! - [`AsyncRetry`] awaits the work and suspends on a tokio timer between attempts.
//!
//! ## Architecture
//! ```text
//!      ┌─────────────────────────────────────────────┐
//!      │ RetryConfig                                 │
//!      │ - max_retries          (total attempts)     │
//!      │ - sleep_time           (delay, 0 = none)    │
//!      │ - raises_on_exception  (propagate or drop)  │
//!      │ - non_retry            (NonRetrySet)        │
//!      └──────┬───────────────────────────┬──────────┘
//!             ▼                           ▼
//!   make_retry_wrapper(cfg)     make_async_retry_wrapper(cfg)
//!             ▼                           ▼
//!       RetryWrapper::wrap(f)    AsyncRetryWrapper::wrap(f)
//!             ▼                           ▼
//!     BlockingRetry<F>               AsyncRetry<F>
//!             │                           │
//!             └──────────► decide() ◄─────┘
//!                 (Retry | Raise(reason))
//! ```
//!
//! ### Call lifecycle
//! ```text
//! for attempt in 0..max_retries {
//!   ├─► invoke work(args)
//!   │     ├─ Ok(v)  ──► return Ok(Some(v))
//!   │     └─ Err(e) ──► decide(&e, attempt, cfg)
//!   │                    ├─ Raise(Exhausted | NonRetryable) ─► return Err(e)
//!   │                    └─ Retry ─► sleep(delay) if another attempt remains
//! }
//! return Ok(None)   // only reachable with raises_on_exception = false
//! ```
//!
//! ## Failure kinds
//! The wrappers classify failures through [`FailureKind`]: every failure exposes a stable
//! label, and the [`NonRetrySet`] lists labels that must propagate immediately.
//! Kind hierarchies are modelled by overriding [`FailureKind::is_kind`].
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use retrykit::{FailureKind, RetryConfig, make_retry_wrapper};
//!
//! #[derive(Debug)]
//! struct Flaky;
//!
//! impl FailureKind for Flaky {
//!     fn kind(&self) -> &'static str { "flaky" }
//! }
//!
//! let calls = Cell::new(0);
//! let retry = make_retry_wrapper(RetryConfig::default());
//! let work = retry.wrap(|| {
//!     calls.set(calls.get() + 1);
//!     if calls.get() < 3 { Err(Flaky) } else { Ok(42) }
//! });
//!
//! assert_eq!(work.run().unwrap(), Some(42));
//! assert_eq!(calls.get(), 3);
//! ```
mod core;
mod error;
mod policies;
mod wrappers;

#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use crate::core::{RetryConfig, RetryConfigBuilder};
pub use crate::error::ConfigError;
pub use crate::policies::{Decision, FailureKind, NonRetrySet, RaiseReason, decide, should_raise};
pub use crate::wrappers::{
    AsyncRetry, AsyncRetryWrapper, BlockingRetry, RetryWrapper, make_async_retry_wrapper,
    make_retry_wrapper,
};
