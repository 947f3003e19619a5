//! # Retry wrappers.
//!
//! - [`BlockingRetry`] blocks the calling thread between attempts (`std::thread::sleep`)
//! - [`AsyncRetry`] suspends on a tokio timer between attempts
//! - [`make_retry_wrapper`] / [`make_async_retry_wrapper`] turn one [`RetryConfig`] into a
//!   reusable factory ([`RetryWrapper`] / [`AsyncRetryWrapper`]) that wraps any callable
//!
//! Both shells call into [`decide`](crate::decide) and share nothing else: the
//! waiting primitive differs in kind, so each keeps its own loop.
//!
//! ## Call result
//! Every call returns `Result<Option<T>, E>`:
//! - `Ok(Some(v))` an attempt succeeded
//! - `Err(e)` the wrapped callable's own failure, unchanged
//! - `Ok(None)` every attempt failed while `raises_on_exception` is `false`

mod blocking;
mod factory;
mod report;
mod suspending;

pub use blocking::BlockingRetry;
pub use factory::{AsyncRetryWrapper, RetryWrapper};
pub use suspending::AsyncRetry;

use crate::core::RetryConfig;

/// Returns a factory that wraps blocking callables with `config`.
///
/// The configuration is created once and shared by every wrapper produced.
///
/// # Example
/// ```rust
/// use retrykit::{FailureKind, RetryConfig, make_retry_wrapper};
///
/// #[derive(Debug)]
/// struct ParseFailure;
/// impl FailureKind for ParseFailure {
///     fn kind(&self) -> &'static str { "parse" }
/// }
///
/// let retry = make_retry_wrapper(RetryConfig::builder().max_retries(2).build()?);
/// let parse = retry.wrap(|s: &str| s.parse::<u16>().map_err(|_| ParseFailure));
///
/// assert_eq!(parse.call("8080").unwrap(), Some(8080));
/// assert!(parse.call("http").is_err());
/// # Ok::<(), retrykit::ConfigError>(())
/// ```
pub fn make_retry_wrapper(config: RetryConfig) -> RetryWrapper {
    RetryWrapper::new(config)
}

/// Returns a factory that wraps async callables with `config`.
///
/// # Example
/// ```rust
/// use std::io;
/// use retrykit::{RetryConfig, make_async_retry_wrapper};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let retry = make_async_retry_wrapper(RetryConfig::default());
/// let fetch = retry.wrap(|| async { Ok::<_, io::Error>("payload") });
///
/// assert_eq!(fetch.run().await?, Some("payload"));
/// # Ok(())
/// # }
/// ```
pub fn make_async_retry_wrapper(config: RetryConfig) -> AsyncRetryWrapper {
    AsyncRetryWrapper::new(config)
}
