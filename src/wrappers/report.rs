//! Log records emitted by both wrappers.
//!
//! Attempts are reported 1-based. Nothing here affects control flow.

use std::time::Duration;

use tracing::{debug, warn};

use crate::policies::RaiseReason;

/// An attempt failed and another one follows.
pub(crate) fn retrying(name: &str, attempt: u32, max: u32, kind: &str, delay: Option<Duration>) {
    debug!(
        wrapper = name,
        attempt = attempt + 1,
        max = max,
        kind = kind,
        delay = ?delay,
        "attempt failed, retrying"
    );
}

/// A retried call finally succeeded.
pub(crate) fn recovered(name: &str, attempt: u32, max: u32) {
    debug!(
        wrapper = name,
        attempt = attempt + 1,
        max = max,
        "attempt succeeded after earlier failures"
    );
}

/// A failure is handed back to the caller.
pub(crate) fn raised(name: &str, attempt: u32, max: u32, kind: &str, reason: RaiseReason) {
    warn!(
        wrapper = name,
        attempt = attempt + 1,
        max = max,
        kind = kind,
        reason = reason.as_label(),
        "giving up, propagating failure"
    );
}

/// Every attempt failed and failures are suppressed; the call yields no value.
pub(crate) fn exhausted(name: &str, max: u32, kind: &str) {
    warn!(
        wrapper = name,
        max = max,
        kind = kind,
        "all attempts failed, failure suppressed"
    );
}
