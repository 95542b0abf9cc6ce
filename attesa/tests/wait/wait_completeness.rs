use std::sync::Arc;

use attesa::Waiter;
use attesa_mock::MockCloud;

use crate::helpers::{descriptor, op, resource, waiter, RecordingReporter};

// The scenario from the design notes: op A ("insert") finishes after one
// poll, op B ("delete") after two. Exactly one resource comes back (for A),
// no errors, and the status lines land in completion order.
#[tokio::test(start_paused = true)]
async fn insert_yields_once_delete_never_yields() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 1)
            .operation(op("B", "delete"), 2)
            .resource(resource("A"))
            .build(),
    );
    let reporter = Arc::new(RecordingReporter::default());
    let waiter = Waiter::builder()
        .executor(cloud.clone())
        .reporter(reporter.clone())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("valid waiter");

    let report = waiter
        .wait_all(vec![descriptor(op("A", "insert")), descriptor(op("B", "delete"))])
        .await;

    assert!(report.is_complete(), "errors: {:?}", report.errors);
    assert_eq!(report.resources.len(), 1);
    assert_eq!(report.resources[0].self_link, "res/A");
    assert!(report.warnings.is_empty());
    assert_eq!(reporter.lines(), vec!["Created [res/A].", "Deleted [res/B]."]);
}

#[tokio::test(start_paused = true)]
async fn stream_yields_each_success_exactly_once() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 1)
            .operation(op("B", "insert"), 2)
            .resource(resource("A"))
            .resource(resource("B"))
            .build(),
    );
    let waiter = waiter(cloud, 30);

    let mut stream = waiter.wait(vec![
        descriptor(op("A", "insert")),
        descriptor(op("B", "insert")),
    ]);

    let mut yielded = Vec::new();
    while let Some(r) = stream.next().await {
        yielded.push(r.self_link);
    }

    // earlier-completing operations come first
    assert_eq!(yielded, vec!["res/A", "res/B"]);
    assert!(stream.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn already_done_operations_skip_polling_entirely() {
    let mut done = op("A", "insert");
    done.status = attesa::OperationStatus::Done;

    let cloud = Arc::new(MockCloud::builder().resource(resource("A")).build());
    let waiter = waiter(cloud.clone(), 30);

    let report = waiter.wait_all(vec![descriptor(done)]).await;

    assert_eq!(report.resources.len(), 1);
    // the only request ever issued is the resource fetch
    let requests = cloud.requests();
    assert_eq!(requests.len(), 1);
    assert!(matches!(&requests[0], attesa::BatchRequest::GetResource(_)));
}
