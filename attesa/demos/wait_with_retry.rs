//! Wrap the executor with the retry middleware so a transient resource-fetch
//! failure recovers instead of landing in the error collection.
//!
//! Run with: `cargo run -p attesa --example wait_with_retry`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use attesa::{
    BatchReply, BatchRequest, Executor, Operation, OperationDescriptor, Resource, RetryConfig,
    ServiceKey, Waiter,
};
use attesa_mock::MockCloud;

const OPS: ServiceKey = ServiceKey::new("compute.globalOperations");
const DISKS: ServiceKey = ServiceKey::new("compute.disks");

/// Fails the first resource fetch with a 503, then behaves.
struct Hiccup {
    inner: Arc<MockCloud>,
    tripped: Mutex<bool>,
}

#[async_trait]
impl Executor for Hiccup {
    fn name(&self) -> &'static str {
        "hiccup"
    }

    async fn execute(&self, requests: Vec<BatchRequest>) -> Vec<BatchReply> {
        let mut replies = self.inner.execute(requests.clone()).await;
        for (slot, request) in requests.iter().enumerate() {
            let mut tripped = self.tripped.lock().expect("mutex poisoned");
            if matches!(request, BatchRequest::GetResource(_)) && !*tripped {
                *tripped = true;
                replies[slot] = BatchReply::Failure {
                    http_status: Some(503),
                    message: "service briefly unavailable".into(),
                };
            }
        }
        replies
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let operation = Operation {
        self_link: "ops/op-1".into(),
        name: Some("op-1".into()),
        operation_type: "insert".into(),
        target_link: Some("disks/disk-1".into()),
        ..Operation::default()
    };

    let cloud = Arc::new(
        MockCloud::builder()
            .operation(operation.clone(), 1)
            .resource(Resource {
                self_link: "disks/disk-1".into(),
                ..Resource::default()
            })
            .build(),
    );

    let waiter = Waiter::builder()
        .executor(Arc::new(Hiccup {
            inner: cloud,
            tripped: Mutex::new(false),
        }))
        .retry(RetryConfig::default())
        .timeout(Duration::from_secs(60))
        .build()?;

    let report = waiter
        .wait_all(vec![OperationDescriptor::new(
            operation,
            "demo-project",
            OPS,
            DISKS,
        )])
        .await;

    println!(
        "complete: {} ({} resource(s), {} error(s))",
        report.is_complete(),
        report.resources.len(),
        report.errors.len()
    );
    Ok(())
}
