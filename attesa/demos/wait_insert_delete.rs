//! Wait on two scripted operations: an insert that produces a resource and
//! a delete that does not.
//!
//! Run with: `cargo run -p attesa --example wait_insert_delete`

use std::sync::Arc;
use std::time::Duration;

use attesa::{Operation, OperationDescriptor, ProgressReporter, Resource, ServiceKey, Waiter};
use attesa_mock::MockCloud;

const OPS: ServiceKey = ServiceKey::new("compute.zoneOperations");
const INSTANCES: ServiceKey = ServiceKey::new("compute.instances");

struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn tick(&self) {
        println!("  ...polling");
    }

    fn status(&self, line: &str) {
        println!("{line}");
    }
}

fn operation(name: &str, op_type: &str) -> Operation {
    Operation {
        self_link: format!("ops/{name}"),
        name: Some(name.to_owned()),
        operation_type: op_type.to_owned(),
        target_link: Some(format!("res/{name}")),
        ..Operation::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(operation("vm-1", "insert"), 2)
            .operation(operation("vm-0", "delete"), 1)
            .resource(Resource {
                self_link: "res/vm-1".into(),
                ..Resource::default()
            })
            .build(),
    );

    let waiter = Waiter::builder()
        .executor(cloud)
        .reporter(Arc::new(StdoutReporter))
        .timeout(Duration::from_secs(60))
        .build()?;

    let descriptors = vec![
        OperationDescriptor::new(operation("vm-1", "insert"), "demo-project", OPS, INSTANCES),
        OperationDescriptor::new(operation("vm-0", "delete"), "demo-project", OPS, INSTANCES),
    ];

    let mut stream = waiter.wait(descriptors);
    while let Some(resource) = stream.next().await {
        println!("resource ready: {}", resource.name());
    }

    for warning in stream.warnings() {
        println!("warning: {warning}");
    }
    for error in stream.errors() {
        eprintln!("error: {error}");
    }
    Ok(())
}
