//! Human-friendly verb labels for operation types.

/// Past/present verb pair used when reporting an operation's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLabels {
    /// Past-tense verb, e.g. `"created"`.
    pub past: &'static str,
    /// Present-tense verb, e.g. `"create"`.
    pub present: &'static str,
}

/// Suffix table mapping wire-level operation types to verb pairs.
///
/// Order matters: the first suffix match wins, so the longer snapshot and
/// instance-group entries sit above the bare verbs they end with.
const LABELS: &[(&str, ActionLabels)] = &[
    (
        "createSnapshot",
        ActionLabels {
            past: "created",
            present: "create",
        },
    ),
    (
        "recreateInstancesInstanceGroupManager",
        ActionLabels {
            past: "recreated",
            present: "recreate",
        },
    ),
    (
        "insert",
        ActionLabels {
            past: "created",
            present: "create",
        },
    ),
    (
        "delete",
        ActionLabels {
            past: "deleted",
            present: "delete",
        },
    ),
    (
        "update",
        ActionLabels {
            past: "updated",
            present: "update",
        },
    ),
    (
        "invalidateCache",
        ActionLabels {
            past: "completed invalidation for",
            present: "complete invalidation for",
        },
    ),
];

/// Fallback pair for operation types with no table entry.
const DEFAULT_LABELS: ActionLabels = ActionLabels {
    past: "updated",
    present: "update",
};

/// Maps a wire-level operation type to its verb pair by suffix match.
///
/// Dotted variants (`"compute.disks.delete"`) match the same entries as the
/// bare verbs; unknown types fall back to `(updated, update)`.
#[must_use]
pub fn labels_for(operation_type: &str) -> ActionLabels {
    LABELS
        .iter()
        .find(|(suffix, _)| operation_type.ends_with(suffix))
        .map_or(DEFAULT_LABELS, |(_, labels)| *labels)
}

/// Whether the operation type describes a deletion.
///
/// Defined through the label table rather than the raw string so dotted
/// variants and future table entries stay consistent with reporting.
#[must_use]
pub fn is_delete(operation_type: &str) -> bool {
    labels_for(operation_type).past == "deleted"
}
