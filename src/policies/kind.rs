//! # Failure kinds and the non-retry set.
//!
//! Every failure handed to the decision policy exposes a stable, snake_case
//! kind label through [`FailureKind`]. A [`NonRetrySet`] is a set of such labels;
//! a failure "matches" the set when it [`is_kind`](FailureKind::is_kind) any member.
//!
//! Kind hierarchies are expressed by overriding [`FailureKind::is_kind`]: the
//! provided [`std::io::Error`] impl reports a precise label such as `"io_timed_out"`
//! and also answers `true` for the parent label `"io"`.
//!
//! # Example
//! ```rust
//! use retrykit::{FailureKind, NonRetrySet};
//!
//! #[derive(Debug)]
//! enum ApiError {
//!     BadRequest,
//!     Unavailable,
//! }
//!
//! impl FailureKind for ApiError {
//!     fn kind(&self) -> &'static str {
//!         match self {
//!             ApiError::BadRequest => "bad_request",
//!             ApiError::Unavailable => "unavailable",
//!         }
//!     }
//! }
//!
//! let fatal = NonRetrySet::from(["bad_request"]);
//! assert!(fatal.matches(&ApiError::BadRequest));
//! assert!(!fatal.matches(&ApiError::Unavailable));
//! ```

use std::collections::BTreeSet;
use std::io;

/// # Kind tag carried by a failure.
///
/// Implement this for the error type of any unit of work you want to retry.
pub trait FailureKind {
    /// Returns a stable kind label (snake_case).
    fn kind(&self) -> &'static str;

    /// Returns `true` when this failure belongs to `kind`.
    ///
    /// Defaults to an exact match on [`FailureKind::kind`]. Override it to let a
    /// failure also match its parent kinds.
    fn is_kind(&self, kind: &str) -> bool {
        self.kind() == kind
    }
}

impl<T: FailureKind + ?Sized> FailureKind for Box<T> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn is_kind(&self, kind: &str) -> bool {
        (**self).is_kind(kind)
    }
}

impl<T: FailureKind + ?Sized> FailureKind for &T {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn is_kind(&self, kind: &str) -> bool {
        (**self).is_kind(kind)
    }
}

/// `std::io::Error` maps its [`io::ErrorKind`] to an `io_*` label and also
/// matches the parent label `"io"`.
impl FailureKind for io::Error {
    fn kind(&self) -> &'static str {
        match self.kind() {
            io::ErrorKind::NotFound => "io_not_found",
            io::ErrorKind::PermissionDenied => "io_permission_denied",
            io::ErrorKind::ConnectionRefused => "io_connection_refused",
            io::ErrorKind::ConnectionReset => "io_connection_reset",
            io::ErrorKind::ConnectionAborted => "io_connection_aborted",
            io::ErrorKind::NotConnected => "io_not_connected",
            io::ErrorKind::AddrInUse => "io_addr_in_use",
            io::ErrorKind::BrokenPipe => "io_broken_pipe",
            io::ErrorKind::AlreadyExists => "io_already_exists",
            io::ErrorKind::WouldBlock => "io_would_block",
            io::ErrorKind::InvalidInput => "io_invalid_input",
            io::ErrorKind::InvalidData => "io_invalid_data",
            io::ErrorKind::TimedOut => "io_timed_out",
            io::ErrorKind::Interrupted => "io_interrupted",
            io::ErrorKind::Unsupported => "io_unsupported",
            io::ErrorKind::UnexpectedEof => "io_unexpected_eof",
            io::ErrorKind::OutOfMemory => "io_out_of_memory",
            _ => "io",
        }
    }

    fn is_kind(&self, kind: &str) -> bool {
        kind == "io" || FailureKind::kind(self) == kind
    }
}

/// Set of failure kinds that force immediate propagation.
///
/// Empty by default. Ordered so that `Debug` output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NonRetrySet {
    kinds: BTreeSet<&'static str>,
}

impl NonRetrySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `kind` added.
    #[must_use]
    pub fn with(mut self, kind: &'static str) -> Self {
        self.kinds.insert(kind);
        self
    }

    /// Adds `kind`; returns `false` if it was already present.
    pub fn insert(&mut self, kind: &'static str) -> bool {
        self.kinds.insert(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if the exact label is a member.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    /// Returns `true` if `failure` belongs to any member kind.
    pub fn matches<E: FailureKind + ?Sized>(&self, failure: &E) -> bool {
        self.kinds.iter().any(|kind| failure.is_kind(kind))
    }

    /// Iterates over the member labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<&'static str> for NonRetrySet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

impl Extend<&'static str> for NonRetrySet {
    fn extend<I: IntoIterator<Item = &'static str>>(&mut self, iter: I) {
        self.kinds.extend(iter);
    }
}

impl<const N: usize> From<[&'static str; N]> for NonRetrySet {
    fn from(kinds: [&'static str; N]) -> Self {
        kinds.into_iter().collect()
    }
}
