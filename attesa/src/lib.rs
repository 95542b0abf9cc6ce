//! Attesa drives heterogeneous cloud long-running operations to completion.
//!
//! Overview
//! - A caller who has submitted several mutating API calls holds one
//!   operation handle per call; attesa polls those handles in batched rounds
//!   through an injected [`Executor`] until each reaches `DONE`.
//! - Successful non-delete operations get a follow-up "get resource"
//!   request; the fetched resources come back through a lazy
//!   [`WaitStream`], in discovery order.
//! - Failures never abort the wait: per-operation errors, transport
//!   failures, and the aggregate timeout entry accumulate in the stream's
//!   error collection for the caller to surface.
//!
//! Key behaviors
//! - One round at a time: the waiter issues a batch, awaits it, sleeps, and
//!   repeats. The inter-round sleep grows linearly (1s, 2s, ...) up to
//!   `max_poll_interval`; the executor may fan out within a round.
//! - The timeout is measured from the start of the wait and never resets.
//!   When it elapses, a single [`AttesaError::Timeout`] names every
//!   still-pending operation; the service may still finish them remotely.
//! - Deletions never trigger a resource fetch, even on success.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use attesa::{Waiter, OperationDescriptor, ServiceKey};
//!
//! const OPS: ServiceKey = ServiceKey::new("compute.zoneOperations");
//! const INSTANCES: ServiceKey = ServiceKey::new("compute.instances");
//!
//! let waiter = Waiter::builder()
//!     .executor(executor)
//!     .timeout(std::time::Duration::from_secs(600))
//!     .build()?;
//!
//! let descriptors = operations
//!     .into_iter()
//!     .map(|op| OperationDescriptor::new(op, "my-project", OPS, INSTANCES))
//!     .collect();
//!
//! let mut stream = waiter.wait(descriptors);
//! while let Some(resource) = stream.next().await {
//!     println!("ready: {}", resource.name());
//! }
//! for err in stream.errors() {
//!     eprintln!("failed: {err}");
//! }
//! ```
#![warn(missing_docs)]

mod round;
mod stream;
mod waiter;

pub use stream::WaitStream;
pub use waiter::{Waiter, WaiterBuilder};

pub use attesa_middleware::{RetryExecutor, RetryMiddleware};

// Re-export the trait seams and value model for convenience
pub use attesa_core::{
    ActionLabels,
    AttesaError,
    BatchReply,
    BatchRequest,
    CallTarget,
    Executor,
    ExecutorMiddleware,
    NullReporter,
    Operation,
    OperationDescriptor,
    OperationError,
    OperationErrorDetail,
    OperationStatus,
    OperationWarning,
    ProgressReporter,
    Resource,
    RetryConfig,
    Scope,
    ServiceKey,
    WaitReport,
    WaiterConfig,
    is_delete,
    labels_for,
    link_name,
};
#[cfg(feature = "tracing")]
pub use attesa_core::LogReporter;
