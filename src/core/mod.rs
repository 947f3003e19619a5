//! Configuration for retry wrappers.
//!
//! - [`RetryConfig`] immutable settings shared by a wrapper factory and every wrapper it produces
//! - [`RetryConfigBuilder`] validated, field-by-field construction

mod builder;
mod config;

pub use builder::RetryConfigBuilder;
pub use config::RetryConfig;
