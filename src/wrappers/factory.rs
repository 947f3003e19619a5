//! # Configured wrapper factories.
//!
//! [`RetryWrapper`] and [`AsyncRetryWrapper`] hold one shared [`RetryConfig`] and
//! wrap any number of callables with it. `wrap` is generic per call, so a single
//! factory accepts closures of different types.

use std::sync::Arc;

use crate::{
    core::RetryConfig,
    wrappers::{AsyncRetry, BlockingRetry},
};

/// Factory for [`BlockingRetry`] wrappers sharing one configuration.
#[derive(Clone, Debug)]
pub struct RetryWrapper {
    config: Arc<RetryConfig>,
}

impl RetryWrapper {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Wraps a blocking callable.
    pub fn wrap<F>(&self, f: F) -> BlockingRetry<F> {
        BlockingRetry::with_shared(Arc::clone(&self.config), f)
    }
}

/// Factory for [`AsyncRetry`] wrappers sharing one configuration.
#[derive(Clone, Debug)]
pub struct AsyncRetryWrapper {
    config: Arc<RetryConfig>,
}

impl AsyncRetryWrapper {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Wraps a callable returning a future.
    pub fn wrap<F>(&self, f: F) -> AsyncRetry<F> {
        AsyncRetry::with_shared(Arc::clone(&self.config), f)
    }
}
