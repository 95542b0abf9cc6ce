//! One planning/partition pass of the polling loop.
//!
//! The loop in [`crate::WaitStream`] alternates two pure steps, both here:
//! planning (walk the unfinished operations, decide what to ask the service
//! next, collect warnings/errors/status lines for those that finished) and
//! partitioning (split the executor's replies into still-running operations,
//! fetched resources, and transport failures).

use std::collections::HashMap;

use attesa_core::{BatchReply, BatchRequest};
use attesa_types::{
    AttesaError, Operation, OperationDescriptor, Resource, is_delete, labels_for,
};

/// Everything one planning pass over the unfinished operations produces.
#[derive(Debug, Default)]
pub(crate) struct RoundPlan {
    pub requests: Vec<BatchRequest>,
    pub warnings: Vec<String>,
    pub errors: Vec<AttesaError>,
    pub status_lines: Vec<String>,
}

/// Walk `unfinished`, joined with the descriptor map, and decide the round's
/// requests.
///
/// Finished operations contribute their warnings, their errors (failed ones
/// are never fetched), a follow-up `GetResource` request when successful and
/// not a deletion, and one status line each. Unfinished ones contribute a
/// `GetOperation` poll. Operations without a descriptor are skipped; that
/// only happens when duplicate self links overwrote each other.
pub(crate) fn plan_round(
    unfinished: &[Operation],
    descriptors: &HashMap<String, OperationDescriptor>,
) -> RoundPlan {
    let mut plan = RoundPlan::default();
    for operation in unfinished {
        let Some(descriptor) = descriptors.get(&operation.self_link) else {
            continue;
        };
        if operation.is_done() {
            for warning in &operation.warnings {
                plan.warnings.push(warning.message.clone());
            }
            if operation.has_failed() {
                record_failure(operation, &mut plan.errors);
            } else if !is_delete(&operation.operation_type) {
                // deletions leave nothing behind to fetch
                if let Some(target) = descriptor.resource_target() {
                    plan.requests.push(BatchRequest::GetResource(target));
                }
            }
            plan.status_lines.push(status_line(operation));
        } else {
            plan.requests
                .push(BatchRequest::GetOperation(descriptor.poll_target()));
        }
    }
    plan
}

/// Append one error entry per nested detail, or a single synthesized entry
/// when the operation carries only an HTTP status.
fn record_failure(operation: &Operation, errors: &mut Vec<AttesaError>) {
    let http_status = operation.http_error_status_code;
    let details = operation
        .error
        .as_ref()
        .map(|error| error.errors.as_slice())
        .unwrap_or_default();
    if details.is_empty() {
        errors.push(AttesaError::operation(
            http_status,
            format!("operation [{}] failed", operation.short_name()),
        ));
        return;
    }
    for detail in details {
        errors.push(AttesaError::operation(http_status, detail.message.clone()));
    }
}

/// Human-readable completion line, e.g. `Created [https://…/vm-1].`.
fn status_line(operation: &Operation) -> String {
    let past = labels_for(&operation.operation_type).past;
    let mut verb = String::with_capacity(past.len());
    let mut chars = past.chars();
    if let Some(first) = chars.next() {
        verb.extend(first.to_uppercase());
        verb.push_str(chars.as_str());
    }
    format!("{verb} [{}].", operation.display_link())
}

/// The executor's replies, split for the next round.
#[derive(Debug, Default)]
pub(crate) struct RoundOutcome {
    /// Operations to carry into the next round, finished or not.
    pub still_pending: Vec<Operation>,
    /// Resources fetched this round, in reply order.
    pub resources: Vec<Resource>,
    /// Transport-level failures reported by the executor.
    pub errors: Vec<AttesaError>,
}

pub(crate) fn partition_replies(replies: Vec<BatchReply>) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();
    for reply in replies {
        match reply {
            BatchReply::Operation(operation) => outcome.still_pending.push(operation),
            BatchReply::Resource(resource) => outcome.resources.push(resource),
            BatchReply::Failure {
                http_status,
                message,
            } => outcome.errors.push(AttesaError::transport(http_status, message)),
        }
    }
    outcome
}
