//! Re-export of foundational types from `attesa-types`.
// Consolidated re-exports so downstream crates can depend on `attesa-core` only

pub use attesa_types::{AttesaError, WaitReport};

pub use attesa_types::{ActionLabels, is_delete, labels_for, link_name};

pub use attesa_types::{CallTarget, Scope, ServiceKey};

pub use attesa_types::{
    Operation, OperationDescriptor, OperationError, OperationErrorDetail, OperationStatus,
    OperationWarning, Resource,
};

pub use attesa_types::{RetryConfig, WaiterConfig};
