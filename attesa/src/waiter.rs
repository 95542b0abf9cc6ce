//! The waiter and its builder.

use std::sync::Arc;
use std::time::Duration;

use attesa_core::{Executor, ExecutorMiddleware, NullReporter, ProgressReporter};
use attesa_middleware::RetryMiddleware;
use attesa_types::{AttesaError, OperationDescriptor, RetryConfig, WaitReport, WaiterConfig};

use crate::stream::WaitStream;

/// Drives a set of long-running operations to completion.
///
/// Holds the injected executor, progress reporter, and configuration; each
/// call to [`wait`](Self::wait) owns its own polling state, so one `Waiter`
/// can serve many independent waits.
pub struct Waiter {
    executor: Arc<dyn Executor>,
    reporter: Arc<dyn ProgressReporter>,
    config: WaiterConfig,
}

impl std::fmt::Debug for Waiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Waiter")
            .field("executor", &self.executor.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Waiter {
    /// Start building a new `Waiter`.
    #[must_use]
    pub fn builder() -> WaiterBuilder {
        WaiterBuilder::new()
    }

    /// Begin waiting on the given descriptors, returning the lazy resource
    /// stream.
    ///
    /// An empty input is a valid no-op: the stream ends immediately with
    /// empty collections. Each descriptor's `operation.self_link` must be
    /// unique within the call; duplicates silently overwrite each other.
    /// Re-invoking with descriptors from a previous wait is unsupported.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "attesa::waiter::wait",
            skip(self, descriptors),
            fields(executor = self.executor.name(), pending = descriptors.len()),
        )
    )]
    #[must_use]
    pub fn wait(&self, descriptors: Vec<OperationDescriptor>) -> WaitStream {
        WaitStream::new(
            Arc::clone(&self.executor),
            Arc::clone(&self.reporter),
            self.config,
            descriptors,
        )
    }

    /// Drive a wait to the end and return the materialized report, for
    /// callers who don't need the laziness of [`wait`](Self::wait).
    pub async fn wait_all(&self, descriptors: Vec<OperationDescriptor>) -> WaitReport {
        let mut stream = self.wait(descriptors);
        while !stream.is_finished() {
            stream.advance().await;
        }
        stream.into_report()
    }
}

/// Builder for a [`Waiter`].
///
/// The executor is the one required dependency; the reporter defaults to
/// [`NullReporter`] and the configuration to [`WaiterConfig::default`].
/// Middleware layers registered via [`middleware`](Self::middleware) wrap
/// the executor innermost-first in registration order when `build()` runs.
pub struct WaiterBuilder {
    executor: Option<Arc<dyn Executor>>,
    reporter: Arc<dyn ProgressReporter>,
    middleware: Vec<Box<dyn ExecutorMiddleware>>,
    config: WaiterConfig,
}

impl Default for WaiterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WaiterBuilder {
    /// Create a builder with no executor and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            executor: None,
            reporter: Arc::new(NullReporter),
            middleware: Vec::new(),
            config: WaiterConfig::default(),
        }
    }

    /// Set the batch executor (required).
    #[must_use]
    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Set the progress reporter. Defaults to [`NullReporter`].
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Register a middleware layer wrapping the executor.
    ///
    /// Layers apply innermost-first in registration order: the first layer
    /// registered sits closest to the raw executor.
    #[must_use]
    pub fn middleware(mut self, layer: impl ExecutorMiddleware + 'static) -> Self {
        self.middleware.push(Box::new(layer));
        self
    }

    /// Convenience: wrap the executor in a
    /// [`attesa_middleware::RetryExecutor`] with the given policy.
    #[must_use]
    pub fn retry(self, config: RetryConfig) -> Self {
        self.middleware(RetryMiddleware::new(config))
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, config: WaiterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the global wall-clock timeout for each wait.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the `Waiter`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no executor was set or the configured timeout
    /// is zero.
    pub fn build(self) -> Result<Waiter, AttesaError> {
        let Some(mut executor) = self.executor else {
            return Err(AttesaError::invalid_arg(
                "no executor set; provide one via executor(...)",
            ));
        };
        if self.config.timeout == Duration::ZERO {
            return Err(AttesaError::invalid_arg(
                "timeout must be positive; a zero budget can never finish a wait",
            ));
        }
        for layer in self.middleware {
            executor = layer.apply(executor);
        }
        Ok(Waiter {
            executor,
            reporter: self.reporter,
            config: self.config,
        })
    }
}
