//! # Thread-blocking retry wrapper.
//!
//! [`BlockingRetry`] re-invokes a synchronous callable until it succeeds, the
//! decision policy says to propagate, or attempts run out.
//!
//! ## Flow
//! ```text
//! for attempt in 0..max_retries {
//!   ├─► f(args.clone())
//!   │     ├─ Ok(v)  ─► return Ok(Some(v))
//!   │     └─ Err(e) ─► decide(&e, attempt, cfg)
//!   │                  ├─ Raise ─► return Err(e)
//!   │                  └─ Retry ─► thread::sleep(delay)
//! }
//! Ok(None)
//! ```
//!
//! ## Rules
//! - The delay blocks the **whole calling thread**
//! - No delay after a success
//! - With failures suppressed, every swallowed failure is followed by the delay,
//!   the last one included
//! - Calls share no state: the wrapper is reentrant and `Sync` when `F` is

use std::borrow::Cow;
use std::sync::Arc;
use std::thread;

use crate::{
    core::RetryConfig,
    policies::{Decision, FailureKind, decide},
    wrappers::report,
};

/// Blocking retry wrapper around a callable `F`.
///
/// Use [`call`](BlockingRetry::call) for `F: Fn(A) -> Result<T, E>` and
/// [`run`](BlockingRetry::run) for zero-argument `F: Fn() -> Result<T, E>`.
///
/// # Example
/// ```rust
/// use std::io;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use retrykit::{BlockingRetry, RetryConfig};
///
/// let calls = AtomicU32::new(0);
/// let read = BlockingRetry::new(RetryConfig::default(), |path: &str| {
///     if calls.fetch_add(1, Ordering::SeqCst) == 0 {
///         Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
///     } else {
///         Ok(format!("contents of {path}"))
///     }
/// })
/// .with_name("read-config");
///
/// assert_eq!(read.call("app.toml").unwrap().as_deref(), Some("contents of app.toml"));
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
#[derive(Debug)]
pub struct BlockingRetry<F> {
    name: Cow<'static, str>,
    config: Arc<RetryConfig>,
    f: F,
}

impl<F> BlockingRetry<F> {
    /// Wraps `f` with `config`.
    pub fn new(config: RetryConfig, f: F) -> Self {
        Self::with_shared(Arc::new(config), f)
    }

    pub(crate) fn with_shared(config: Arc<RetryConfig>, f: F) -> Self {
        Self {
            name: Cow::Borrowed("retry"),
            config,
            f,
        }
    }

    /// Returns the wrapper with a name used in log records.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Unwraps the inner callable.
    pub fn into_inner(self) -> F {
        self.f
    }

    /// Invokes the callable with `args`, retrying per the configuration.
    ///
    /// `args` is cloned for each attempt, so every attempt sees the original arguments.
    pub fn call<A, T, E>(&self, args: A) -> Result<Option<T>, E>
    where
        F: Fn(A) -> Result<T, E>,
        A: Clone,
        E: FailureKind,
    {
        self.drive(|| (self.f)(args.clone()))
    }

    /// Invokes a zero-argument callable, retrying per the configuration.
    pub fn run<T, E>(&self) -> Result<Option<T>, E>
    where
        F: Fn() -> Result<T, E>,
        E: FailureKind,
    {
        self.drive(|| (self.f)())
    }

    fn drive<G, T, E>(&self, mut invoke: G) -> Result<Option<T>, E>
    where
        G: FnMut() -> Result<T, E>,
        E: FailureKind,
    {
        let max = self.config.max_retries();
        let mut last_kind = "";

        for attempt in 0..max {
            let err = match invoke() {
                Ok(value) => {
                    if attempt > 0 {
                        report::recovered(&self.name, attempt, max);
                    }
                    return Ok(Some(value));
                }
                Err(err) => err,
            };

            if let Decision::Raise(reason) = decide(&err, attempt, &self.config) {
                report::raised(&self.name, attempt, max, err.kind(), reason);
                return Err(err);
            }

            last_kind = err.kind();
            let delay = self.config.delay();
            report::retrying(&self.name, attempt, max, last_kind, delay);
            if let Some(delay) = delay {
                thread::sleep(delay);
            }
        }

        report::exhausted(&self.name, max, last_kind);
        Ok(None)
    }
}
