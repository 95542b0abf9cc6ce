//! Caller-assembled descriptor pairing an operation with its endpoints.

use crate::link::link_name;
use crate::operation::Operation;
use crate::service::{CallTarget, ServiceKey};

/// Bundle of an in-flight [`Operation`] and the service endpoints needed to
/// poll it and to fetch the resource it produces.
///
/// Built once per submitted asynchronous call, immediately before waiting,
/// and never mutated afterwards. Within one wait every descriptor must carry
/// a distinct `operation.self_link`; duplicates silently overwrite each
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// The in-flight operation handle.
    pub operation: Operation,
    /// Caller/tenant project identifier used to address follow-up requests.
    pub project: String,
    /// Service that answers "get operation" polls.
    pub operation_service: ServiceKey,
    /// Service that answers the follow-up "get resource" request.
    ///
    /// Consulted only when the operation succeeds and is not a deletion.
    pub resource_service: ServiceKey,
}

impl OperationDescriptor {
    /// Bundle an operation with the endpoints needed to drive it.
    #[must_use]
    pub fn new(
        operation: Operation,
        project: impl Into<String>,
        operation_service: ServiceKey,
        resource_service: ServiceKey,
    ) -> Self {
        Self {
            operation,
            project: project.into(),
            operation_service,
            resource_service,
        }
    }

    /// Addressing for the next "get operation" poll, qualified by the
    /// operation's zone/region scope.
    #[must_use]
    pub fn poll_target(&self) -> CallTarget {
        CallTarget {
            service: self.operation_service,
            project: self.project.clone(),
            scope: self.operation.scope(),
            name: self.operation.short_name().to_owned(),
        }
    }

    /// Addressing for the follow-up "get resource" request, or `None` when
    /// the operation never named a target.
    #[must_use]
    pub fn resource_target(&self) -> Option<CallTarget> {
        let target_link = self.operation.target_link.as_deref()?;
        Some(CallTarget {
            service: self.resource_service,
            project: self.project.clone(),
            scope: self.operation.scope(),
            name: link_name(target_link).to_owned(),
        })
    }
}
