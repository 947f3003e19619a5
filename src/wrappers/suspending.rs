//! # Async retry wrapper.
//!
//! [`AsyncRetry`] awaits a callable's future until it succeeds, the decision
//! policy says to propagate, or attempts run out. Between attempts it suspends
//! on [`tokio::time::sleep`], so other tasks on the same runtime keep running.
//!
//! ## Flow
//! ```text
//! for attempt in 0..max_retries {
//!   ├─► f(args.clone()).await
//!   │     ├─ Ok(v)  ─► return Ok(Some(v))
//!   │     └─ Err(e) ─► decide(&e, attempt, cfg)
//!   │                  ├─ Raise ─► return Err(e)
//!   │                  └─ Retry ─► sleep(delay).await
//! }
//! Ok(None)
//! ```
//!
//! ## Cancellation
//! There is no cancellation handling of its own. Dropping the call's future
//! (`tokio::time::timeout`, `select!`, task abort) stops it at whichever await
//! point it is parked on, exactly as for any tokio future.

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use tokio::time;

use crate::{
    core::RetryConfig,
    policies::{Decision, FailureKind, decide},
    wrappers::report,
};

/// Async retry wrapper around a callable `F` returning a future.
///
/// Use [`call`](AsyncRetry::call) for `F: Fn(A) -> Fut` and
/// [`run`](AsyncRetry::run) for zero-argument `F: Fn() -> Fut`,
/// where `Fut: Future<Output = Result<T, E>>`.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
/// use retrykit::{AsyncRetry, FailureKind, RetryConfig};
///
/// #[derive(Debug)]
/// struct Unavailable;
/// impl FailureKind for Unavailable {
///     fn kind(&self) -> &'static str { "unavailable" }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), retrykit::ConfigError> {
/// let calls = Arc::new(AtomicU32::new(0));
/// let cfg = RetryConfig::builder().sleep_time(Duration::from_millis(5)).build()?;
///
/// let counter = Arc::clone(&calls);
/// let ping = AsyncRetry::new(cfg, move |host: &'static str| {
///     let counter = Arc::clone(&counter);
///     async move {
///         if counter.fetch_add(1, Ordering::SeqCst) < 1 {
///             Err(Unavailable)
///         } else {
///             Ok(format!("pong from {host}"))
///         }
///     }
/// });
///
/// let reply = ping.call("db-1").await.unwrap();
/// assert_eq!(reply.as_deref(), Some("pong from db-1"));
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncRetry<F> {
    name: Cow<'static, str>,
    config: Arc<RetryConfig>,
    f: F,
}

impl<F> AsyncRetry<F> {
    /// Wraps `f` with `config`.
    pub fn new(config: RetryConfig, f: F) -> Self {
        Self::with_shared(Arc::new(config), f)
    }

    pub(crate) fn with_shared(config: Arc<RetryConfig>, f: F) -> Self {
        Self {
            name: Cow::Borrowed("async_retry"),
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

    /// Awaits the callable with `args`, retrying per the configuration.
    ///
    /// `args` is moved into the call and cloned for each attempt, so the
    /// returned future is `Send` when `A: Send`.
    pub async fn call<A, Fut, T, E>(&self, args: A) -> Result<Option<T>, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        A: Clone,
        E: FailureKind,
    {
        self.drive(move || (self.f)(args.clone())).await
    }

    /// Awaits a zero-argument callable, retrying per the configuration.
    pub async fn run<Fut, T, E>(&self) -> Result<Option<T>, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: FailureKind,
    {
        self.drive(|| (self.f)()).await
    }

    async fn drive<G, Fut, T, E>(&self, mut invoke: G) -> Result<Option<T>, E>
    where
        G: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: FailureKind,
    {
        let max = self.config.max_retries();
        let mut last_kind = "";

        for attempt in 0..max {
            let err = match invoke().await {
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
            drop(err);
            let delay = self.config.delay();
            report::retrying(&self.name, attempt, max, last_kind, delay);
            if let Some(delay) = delay {
                time::sleep(delay).await;
            }
        }

        report::exhausted(&self.name, max, last_kind);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Boom;
    use crate::{NonRetrySet, make_async_retry_wrapper};
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    fn cfg(max: u32, sleep: Duration, raises: bool, non_retry: &[&'static str]) -> RetryConfig {
        RetryConfig::new(
            max,
            sleep,
            raises,
            non_retry.iter().copied().collect::<NonRetrySet>(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_recovers_after_two_failures() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(RetryConfig::default(), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 { Err(Boom::Value("x")) } else { Ok(42) }
        });

        assert_eq!(work.run().await, Ok(Some(42)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_always_failing_runs_every_attempt_then_propagates() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(cfg(4, Duration::ZERO, true, &[]), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(Boom::Value("x"))
        });

        assert_eq!(work.run().await, Err(Boom::Value("x")));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_retryable_kind_propagates_after_one_call() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(cfg(3, Duration::ZERO, true, &["type_error"]), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>(Boom::Type("bad"))
        });

        assert_eq!(work.run().await, Err(Boom::Type("bad")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_suppressed_exhaustion_yields_none() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(cfg(3, Duration::ZERO, false, &["type_error"]), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(Boom::Type("swallowed"))
        });

        assert_eq!(work.run().await, Ok(None));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_arguments_reach_every_attempt() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(RetryConfig::default(), move |name: String| async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Boom::Value("x"))
            } else {
                Ok(name.len())
            }
        });

        assert_eq!(work.call("orders".to_string()).await, Ok(Some(6)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_call_future_is_send_with_send_only_args() {
        fn assert_send<T: Send>(value: T) -> T {
            value
        }

        let work = AsyncRetry::new(RetryConfig::default(), |seed: Cell<u32>| async move {
            Ok::<_, Boom>(seed.get() + 1)
        });

        let pending = assert_send(work.call(Cell::new(41)));
        assert_eq!(pending.await, Ok(Some(42)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_sleep_adds_no_delay() {
        let work = AsyncRetry::new(cfg(3, Duration::ZERO, true, &[]), || async {
            Err::<(), _>(Boom::Value("x"))
        });

        let started = Instant::now();
        assert!(work.run().await.is_err());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_once_per_failure_before_success() {
        let delay = Duration::from_millis(100);
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(cfg(5, delay, true, &[]), move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(Boom::Value("x"))
            } else {
                Ok("done")
            }
        });

        let started = Instant::now();
        assert_eq!(work.run().await, Ok(Some("done")));
        let elapsed = started.elapsed();

        assert!(elapsed >= delay * 2, "elapsed {elapsed:?}");
        assert!(elapsed < delay * 3, "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_suppressed_failures_each_wait_including_the_last() {
        let delay = Duration::from_millis(100);
        let work = AsyncRetry::new(cfg(3, delay, false, &[]), || async {
            Err::<(), _>(Boom::Value("x"))
        });

        let started = Instant::now();
        assert_eq!(work.run().await, Ok(None));
        let elapsed = started.elapsed();

        assert!(elapsed >= delay * 3, "elapsed {elapsed:?}");
        assert!(elapsed < delay * 4, "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_lets_other_tasks_progress() {
        let ticks = &AtomicUsize::new(0);
        let seen_on_retry = &AtomicUsize::new(usize::MAX);
        let calls = &AtomicUsize::new(0);

        let work = AsyncRetry::new(cfg(2, Duration::from_millis(100), true, &[]), move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Boom::Value("x"))
            } else {
                seen_on_retry.store(ticks.load(Ordering::SeqCst), Ordering::SeqCst);
                Ok(())
            }
        });

        let ticker = async {
            for _ in 0..5 {
                time::sleep(Duration::from_millis(10)).await;
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        };

        let (res, ()) = tokio::join!(work.run(), ticker);
        assert_eq!(res, Ok(Some(())));
        assert_eq!(seen_on_retry.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_call_stops_further_attempts() {
        let calls = &AtomicUsize::new(0);
        let work = AsyncRetry::new(cfg(5, Duration::from_millis(100), true, &[]), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(Boom::Value("x"))
        });

        let res = time::timeout(Duration::from_millis(150), work.run()).await;
        assert!(res.is_err(), "timeout should cancel the retry loop");
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        time::sleep(Duration::from_secs(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_calls_are_independent() {
        let retry = make_async_retry_wrapper(cfg(3, Duration::from_millis(1), true, &[]));
        let counters: Arc<Vec<AtomicUsize>> = Arc::new((0..4).map(|_| AtomicUsize::new(0)).collect());

        let shared = Arc::clone(&counters);
        let work = Arc::new(
            retry.wrap(move |id: usize| {
                let counters = Arc::clone(&shared);
                async move {
                    if counters[id].fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(Boom::Value("x"))
                    } else {
                        Ok(id * 10)
                    }
                }
            })
            .with_name("parallel"),
        );

        let handles: Vec<_> = (0..4)
            .map(|id| {
                let work = Arc::clone(&work);
                tokio::spawn(async move { work.call(id).await })
            })
            .collect();

        let results = futures::future::join_all(handles).await;
        for (id, res) in results.into_iter().enumerate() {
            assert_eq!(res.unwrap(), Ok(Some(id * 10)));
        }
        for counter in counters.iter() {
            assert_eq!(counter.load(Ordering::SeqCst), 3);
        }
    }
}
