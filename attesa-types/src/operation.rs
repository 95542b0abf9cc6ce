//! Wire-level model of cloud long-running operations and their resources.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::link::link_name;
use crate::service::Scope;

/// Tri-state lifecycle of a long-running operation.
///
/// Wire spellings vary per API family but always collapse to these three;
/// anything other than `Done` means "keep polling".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum OperationStatus {
    /// Accepted by the service but not yet started.
    #[default]
    Pending,
    /// Actively progressing.
    Running,
    /// Reached a terminal state; the failure fields decide the outcome.
    Done,
}

impl OperationStatus {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an operation's structured failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationErrorDetail {
    /// Service-specific error code (e.g. `"RESOURCE_NOT_FOUND"`).
    pub code: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Structured failure payload of a finished operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationError {
    /// Individual failure entries; usually one, occasionally several.
    pub errors: Vec<OperationErrorDetail>,
}

/// Non-fatal notice attached to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationWarning {
    /// Service-specific warning code.
    pub code: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// A cloud long-running operation as returned by the service.
///
/// Partial server payloads are common, so every field deserializes from an
/// absent key. The waiter keys on `self_link` and reads `status`,
/// `operation_type`, the failure fields, `warnings`, and the scope
/// qualifiers; everything else is carried for callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    /// Unique address of the operation. Must be unique within one wait.
    pub self_link: String,
    /// Server-assigned short name, used to address follow-up polls.
    pub name: Option<String>,
    /// Lifecycle status.
    pub status: OperationStatus,
    /// Wire-level verb tag (e.g. `"insert"`, `"compute.disks.delete"`).
    ///
    /// Consumed for human-readable labeling and the delete predicate only,
    /// never for control flow beyond that.
    pub operation_type: String,
    /// Address of the resource the operation creates or affects.
    pub target_link: Option<String>,
    /// HTTP status recorded when the operation finished unsuccessfully.
    pub http_error_status_code: Option<u16>,
    /// Structured failure detail, populated once the operation failed.
    pub error: Option<OperationError>,
    /// Non-fatal messages accumulated while the operation ran.
    pub warnings: Vec<OperationWarning>,
    /// Zone qualifier URL for zonal operations.
    pub zone: Option<String>,
    /// Region qualifier URL for regional operations.
    pub region: Option<String>,
    /// Submission timestamp.
    pub insert_time: Option<DateTime<Utc>>,
    /// Execution start timestamp.
    pub start_time: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub end_time: Option<DateTime<Utc>>,
}

impl Operation {
    /// Returns `true` once the operation has reached its terminal state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == OperationStatus::Done
    }

    /// Whether a finished operation counts as failed.
    ///
    /// Failure means a structured `error` payload, or an HTTP status that is
    /// present and not 200. A missing status alongside no `error` is full
    /// success even when other fields are ambiguous.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.error.is_some() || self.http_error_status_code.is_some_and(|code| code != 200)
    }

    /// Scope qualifier collapsed from the `zone`/`region` URLs.
    ///
    /// At most one of the two is set on the wire; `zone` wins if both are.
    #[must_use]
    pub fn scope(&self) -> Scope {
        if let Some(zone) = &self.zone {
            Scope::Zone(link_name(zone).to_owned())
        } else if let Some(region) = &self.region {
            Scope::Region(link_name(region).to_owned())
        } else {
            Scope::Global
        }
    }

    /// Short name for addressing follow-up polls: the server-assigned
    /// `name` when present, otherwise the tail of `self_link`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| link_name(&self.self_link))
    }

    /// Display label for status lines: the `target_link` when present,
    /// otherwise the operation's own address.
    #[must_use]
    pub fn display_link(&self) -> &str {
        self.target_link.as_deref().unwrap_or(&self.self_link)
    }
}

/// The entity a successful non-delete operation produces, fetched via a
/// follow-up "get resource" call.
///
/// Only `self_link` is interpreted; the remaining service-specific payload
/// is preserved as-is for the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    /// Unique address of the resource.
    pub self_link: String,
    /// Remaining service-specific fields, untouched.
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl Resource {
    /// Short name of the resource: the tail of `self_link`.
    #[must_use]
    pub fn name(&self) -> &str {
        link_name(&self.self_link)
    }
}
