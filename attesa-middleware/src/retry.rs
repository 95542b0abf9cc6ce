//! Transparent retry of transient per-request batch failures.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use attesa_core::{BatchReply, BatchRequest, Executor, ExecutorMiddleware};
use attesa_types::RetryConfig;
use rand::Rng;

/// Executor decorator that re-issues requests whose replies were transient
/// failures.
///
/// After the inner batch returns, every reply that is a
/// [`BatchReply::Failure`] with a status in `retryable_codes` is retried with
/// jittered exponential backoff, up to `max_attempts` total attempts per
/// request. Retried replies are patched back into their original slots, so
/// the batch contract (one reply per request, in request order) holds across
/// the wrapper. Successes and non-retryable failures pass through untouched.
pub struct RetryExecutor {
    inner: Arc<dyn Executor>,
    config: RetryConfig,
}

impl RetryExecutor {
    /// Wrap an inner executor with the given retry policy.
    #[must_use]
    pub fn new(inner: Arc<dyn Executor>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Wrap an inner executor with [`RetryConfig::default`].
    #[must_use]
    pub fn with_defaults(inner: Arc<dyn Executor>) -> Self {
        Self::new(inner, RetryConfig::default())
    }

    fn is_retryable(&self, reply: &BatchReply) -> bool {
        match reply {
            BatchReply::Failure {
                http_status: Some(code),
                ..
            } => self.config.retryable_codes.contains(code),
            _ => false,
        }
    }

    /// Delay before retry attempt `attempt` (1-based count of attempts
    /// already made), exponential from `min_backoff_ms`, capped at
    /// `max_backoff_ms`, with additive random jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let base = self
            .config
            .min_backoff_ms
            .saturating_mul(u64::from(self.config.factor).saturating_pow(exponent))
            .min(self.config.max_backoff_ms);
        let jitter_percent = u64::from(self.config.jitter_percent.min(100));
        let jitter_range = std::cmp::max(1, base.saturating_mul(jitter_percent) / 100);
        let mut rng = rand::rng();
        Duration::from_millis(base + rng.random_range(0..jitter_range))
    }
}

#[async_trait]
impl Executor for RetryExecutor {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "attesa::middleware::retry", skip(self, requests), fields(batch = requests.len()))
    )]
    async fn execute(&self, requests: Vec<BatchRequest>) -> Vec<BatchReply> {
        let mut replies = self.inner.execute(requests.clone()).await;
        let mut attempt = 1;
        while attempt < self.config.max_attempts.max(1) {
            let pending: Vec<usize> = replies
                .iter()
                .enumerate()
                .filter(|(_, reply)| self.is_retryable(reply))
                .map(|(slot, _)| slot)
                .collect();
            if pending.is_empty() {
                break;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(retrying = pending.len(), attempt, "retrying transient failures");

            tokio::time::sleep(self.backoff_delay(attempt)).await;
            let retry_batch: Vec<BatchRequest> =
                pending.iter().map(|&slot| requests[slot].clone()).collect();
            let retried = self.inner.execute(retry_batch).await;
            for (slot, reply) in pending.into_iter().zip(retried) {
                replies[slot] = reply;
            }
            attempt += 1;
        }
        replies
    }
}

/// Middleware layer that wraps the executor under construction in a
/// [`RetryExecutor`]. Registered on the waiter builder.
pub struct RetryMiddleware {
    config: RetryConfig,
}

impl RetryMiddleware {
    /// Build a retry layer with the given policy.
    #[must_use]
    pub const fn new(config: RetryConfig) -> Self {
        Self { config }
    }
}

impl Default for RetryMiddleware {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl ExecutorMiddleware for RetryMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn Executor>) -> Arc<dyn Executor> {
        Arc::new(RetryExecutor::new(inner, self.config))
    }

    fn name(&self) -> &'static str {
        "RetryExecutor"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}
