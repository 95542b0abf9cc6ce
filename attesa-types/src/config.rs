//! Configuration types shared across the waiter and middleware.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for one operation-waiting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterConfig {
    /// Wall-clock budget for a whole wait, measured from its start and never
    /// reset between polling rounds.
    pub timeout: Duration,
    /// Upper bound on the sleep between polling rounds. The sleep grows
    /// linearly from one second per round until it hits this cap.
    pub max_poll_interval: Duration,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(1800),
            max_poll_interval: Duration::from_secs(5),
        }
    }
}

/// Backoff-and-retry policy for transient per-request batch failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum attempts per request, the initial send included.
    pub max_attempts: u32,
    /// Minimum backoff delay in milliseconds.
    pub min_backoff_ms: u64,
    /// Maximum backoff delay in milliseconds.
    pub max_backoff_ms: u64,
    /// Exponential factor to increase the delay after each attempt (>= 1).
    pub factor: u32,
    /// Random jitter percentage [0, 100] applied to each delay.
    pub jitter_percent: u8,
    /// HTTP statuses considered transient and worth retrying.
    pub retryable_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_backoff_ms: 250,
            max_backoff_ms: 2_000,
            factor: 2,
            jitter_percent: 20,
            retryable_codes: vec![429, 500, 502, 503, 504],
        }
    }
}
