//! Retry decision policy.
//!
//! This module groups the pieces that decide **whether** a failed attempt is
//! retried or propagated.
//!
//! ## Contents
//! - [`FailureKind`]  how a failure exposes its kind label (and kind hierarchy)
//! - [`NonRetrySet`]  labels that must never be retried
//! - [`decide`] / [`should_raise`]  the pure decision function shared by both wrappers
//!
//! ## Quick wiring
//! ```text
//! BlockingRetry / AsyncRetry
//!      └─► on Err(e) at attempt i:
//!           decide(&e, i, &config) ─► Retry | Raise(Exhausted | NonRetryable)
//! ```

mod decision;
mod kind;

pub use decision::{Decision, RaiseReason, decide, should_raise};
pub use kind::{FailureKind, NonRetrySet};
