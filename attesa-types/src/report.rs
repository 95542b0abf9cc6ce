//! Report envelope produced by a drained wait.

use serde::{Deserialize, Serialize};

use crate::error::AttesaError;
use crate::operation::Resource;

/// Aggregate outcome of one wait: the fetched resources plus the warning and
/// error collections accumulated along the way.
///
/// The waiter never raises for individual operation failures; callers
/// inspect `errors` here (or on the stream) and decide whether to surface an
/// aggregate failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WaitReport {
    /// Resources fetched for successful non-delete operations, in discovery
    /// order.
    pub resources: Vec<Resource>,
    /// Non-fatal messages collected from any operation.
    pub warnings: Vec<String>,
    /// Fatal per-operation, transport, and timeout entries.
    pub errors: Vec<AttesaError>,
}

impl WaitReport {
    /// Returns `true` when every operation completed without a fatal entry.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
