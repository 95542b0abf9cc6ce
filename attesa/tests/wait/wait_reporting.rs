use std::sync::Arc;

use attesa::{Operation, OperationWarning, Waiter};
use attesa_mock::MockCloud;

use crate::helpers::{descriptor, op, resource, RecordingReporter};

fn warning_op(name: &str) -> Operation {
    let mut operation = op(name, "insert");
    operation.warnings = vec![OperationWarning {
        code: Some("QUOTA".into()),
        message: "quota nearly exhausted".into(),
    }];
    operation
}

fn reporting_waiter(
    cloud: Arc<MockCloud>,
    reporter: Arc<RecordingReporter>,
) -> Waiter {
    Waiter::builder()
        .executor(cloud)
        .reporter(reporter)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("valid waiter")
}

#[tokio::test(start_paused = true)]
async fn reporter_ticks_once_per_round() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 2)
            .resource(resource("A"))
            .build(),
    );
    let reporter = Arc::new(RecordingReporter::default());
    let waiter = reporting_waiter(cloud, reporter.clone());

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete());
    // rounds: poll, poll (done), fetch
    assert_eq!(reporter.ticks(), 3);
}

#[tokio::test(start_paused = true)]
async fn status_lines_are_emitted_even_for_failed_operations() {
    let mut failing = op("A", "insert");
    failing.http_error_status_code = Some(500);

    let cloud = Arc::new(MockCloud::builder().operation(failing, 1).build());
    let reporter = Arc::new(RecordingReporter::default());
    let waiter = reporting_waiter(cloud, reporter.clone());

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(!report.is_complete());
    assert_eq!(reporter.lines(), vec!["Created [res/A]."]);
}

#[tokio::test(start_paused = true)]
async fn warnings_reach_the_report() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(warning_op("A"), 1)
            .resource(resource("A"))
            .build(),
    );
    let reporter = Arc::new(RecordingReporter::default());
    let waiter = reporting_waiter(cloud, reporter);

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete());
    assert_eq!(report.warnings, vec!["quota nearly exhausted"]);
}

#[tokio::test(start_paused = true)]
async fn stream_collections_match_the_drained_report() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(warning_op("A"), 1)
            .fail_resource("A", 500, "backend unavailable")
            .build(),
    );
    let reporter = Arc::new(RecordingReporter::default());
    let waiter = reporting_waiter(cloud, reporter);

    let mut stream = waiter.wait(vec![descriptor(op("A", "insert"))]);
    assert!(stream.next().await.is_none());

    assert_eq!(stream.warnings(), ["quota nearly exhausted"]);
    assert_eq!(stream.errors().len(), 1);

    let report = stream.into_report();
    assert!(!report.is_complete());
    assert!(report.resources.is_empty());
}
