use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the attesa workspace.
///
/// Covers argument validation, per-operation failures reported by the
/// service, transport-level batch failures, and the aggregate timeout entry.
/// Only `InvalidArg` is ever returned as an `Err`; everything else is
/// collected into the error output of a wait and surfaced by the caller.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttesaError {
    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An operation reached its terminal state carrying a failure signal.
    #[error("operation failed [{code}]: {message}", code = code_label(.http_status))]
    Operation {
        /// HTTP status reported by the service, when it gave one.
        http_status: Option<u16>,
        /// Human-readable error message.
        message: String,
    },

    /// The batch executor failed to carry out one request.
    #[error("request failed [{code}]: {message}", code = code_label(.http_status))]
    Transport {
        /// HTTP status of the transport failure, when known.
        http_status: Option<u16>,
        /// Human-readable error message.
        message: String,
    },

    /// The wait's global deadline elapsed with operations still pending.
    ///
    /// Exactly one of these is recorded per wait. The named operations may
    /// still finish on the service side after the waiter gives up.
    #[error(
        "did not {action} within {after:?}: [{links}]; the operations may still be underway remotely",
        links = .target_links.join(", ")
    )]
    Timeout {
        /// Present-tense verb describing what was being waited on.
        action: String,
        /// The elapsed budget.
        after: Duration,
        /// Target links of every operation still pending at the deadline.
        target_links: Vec<String>,
    },
}

fn code_label(code: &Option<u16>) -> String {
    code.map_or_else(|| "unknown".to_owned(), |c| c.to_string())
}

impl AttesaError {
    /// Helper: build an `Operation` error from a status code and message.
    pub fn operation(http_status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Operation {
            http_status,
            message: message.into(),
        }
    }

    /// Helper: build a `Transport` error from a status code and message.
    pub fn transport(http_status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            http_status,
            message: message.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    #[must_use]
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// HTTP status carried by the error, when the variant has one.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Operation { http_status, .. } | Self::Transport { http_status, .. } => {
                *http_status
            }
            _ => None,
        }
    }

    /// Returns `true` for the aggregate timeout entry.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
