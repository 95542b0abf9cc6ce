//! Executor middleware for the attesa workspace.
//!
//! Middleware wraps an inner [`attesa_core::Executor`] and returns another
//! executor that augments its behavior while preserving the batch contract:
//! one reply per request, in request order. The only layer shipped today is
//! [`RetryExecutor`], which transparently re-issues requests whose replies
//! were transient failures.
#![warn(missing_docs)]

mod retry;

pub use retry::{RetryExecutor, RetryMiddleware};
