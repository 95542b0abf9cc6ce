//! Wire-level data model and configuration primitives for the `attesa` workspace.
#![warn(missing_docs)]

mod config;
mod descriptor;
mod error;
mod labels;
mod link;
mod operation;
mod report;
mod service;

pub use config::{RetryConfig, WaiterConfig};
pub use descriptor::OperationDescriptor;
pub use error::AttesaError;
pub use labels::{ActionLabels, is_delete, labels_for};
pub use link::link_name;
pub use operation::{
    Operation, OperationError, OperationErrorDetail, OperationStatus, OperationWarning, Resource,
};
pub use report::WaitReport;
pub use service::{CallTarget, Scope, ServiceKey};
