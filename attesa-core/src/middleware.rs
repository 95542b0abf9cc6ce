//! Middleware trait for wrapping [`Executor`] implementations.

use std::sync::Arc;

use crate::executor::Executor;

/// Trait implemented by executor middleware layers.
///
/// A middleware consumes an inner `Executor` and returns a wrapped executor
/// that augments or restricts behavior (e.g., retries, instrumentation).
/// Wrappers must preserve the executor contract: one reply per request, in
/// request order.
pub trait ExecutorMiddleware: Send + Sync {
    /// Apply this middleware to wrap an inner executor and return the wrapped executor.
    fn apply(self: Box<Self>, inner: Arc<dyn Executor>) -> Arc<dyn Executor>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
