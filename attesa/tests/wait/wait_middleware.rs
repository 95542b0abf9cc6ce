use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use attesa::{BatchReply, BatchRequest, Executor, RetryConfig, Waiter};
use attesa_mock::MockCloud;

use crate::helpers::{descriptor, op, resource};

/// Delegates to a [`MockCloud`] but fails the first `GetResource` it sees
/// with a transient status.
struct FlakyFetch {
    inner: Arc<MockCloud>,
    tripped: Mutex<bool>,
}

#[async_trait]
impl Executor for FlakyFetch {
    fn name(&self) -> &'static str {
        "flaky-fetch"
    }

    async fn execute(&self, requests: Vec<BatchRequest>) -> Vec<BatchReply> {
        let mut replies = self.inner.execute(requests.clone()).await;
        for (slot, request) in requests.iter().enumerate() {
            if matches!(request, BatchRequest::GetResource(_)) {
                let mut tripped = self.tripped.lock().expect("mutex poisoned");
                if !*tripped {
                    *tripped = true;
                    replies[slot] = BatchReply::Failure {
                        http_status: Some(503),
                        message: "transient".into(),
                    };
                }
            }
        }
        replies
    }
}

fn quick_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        min_backoff_ms: 10,
        max_backoff_ms: 40,
        jitter_percent: 0,
        ..RetryConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn retry_middleware_recovers_a_transient_fetch_failure() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 1)
            .resource(resource("A"))
            .build(),
    );
    let flaky = Arc::new(FlakyFetch {
        inner: cloud,
        tripped: Mutex::new(false),
    });

    let waiter = Waiter::builder()
        .executor(flaky)
        .retry(quick_retry())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("valid waiter");

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete(), "errors: {:?}", report.errors);
    assert_eq!(report.resources.len(), 1);
    assert_eq!(report.resources[0].self_link, "res/A");
}

#[tokio::test(start_paused = true)]
async fn without_retry_the_transient_failure_surfaces() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 1)
            .resource(resource("A"))
            .build(),
    );
    let flaky = Arc::new(FlakyFetch {
        inner: cloud,
        tripped: Mutex::new(false),
    });

    let waiter = Waiter::builder()
        .executor(flaky)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("valid waiter");

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.resources.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].http_status(), Some(503));
}
