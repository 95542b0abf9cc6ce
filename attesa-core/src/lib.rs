//! attesa-core
//!
//! Traits and batch types shared across the attesa ecosystem.
//!
//! - `executor`: the [`Executor`] trait plus the tagged batch request/reply
//!   types it exchanges.
//! - `reporter`: the [`ProgressReporter`] sink for ticks and status lines.
//! - `middleware`: the [`ExecutorMiddleware`] trait implemented by executor
//!   wrappers.
//! - `types`: consolidated re-exports of the `attesa-types` value model.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `Executor` is an `async_trait` object and this crate itself spawns
//! nothing, so executors can be written against any runtime. The `attesa`
//! orchestrator that drives them sleeps through `tokio::time`, so a full
//! waiting pipeline runs under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// The batch executor trait and its tagged request/reply types.
pub mod executor;
/// Middleware trait implemented by executor wrappers.
pub mod middleware;
/// Progress sink trait and the provided reporters.
pub mod reporter;
pub mod types;

pub use executor::{BatchReply, BatchRequest, Executor};
pub use middleware::ExecutorMiddleware;
#[cfg(feature = "tracing")]
pub use reporter::LogReporter;
pub use reporter::{NullReporter, ProgressReporter};
pub use types::*;
