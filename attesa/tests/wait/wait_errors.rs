use std::sync::Arc;

use attesa::{AttesaError, Operation, OperationError, OperationErrorDetail};
use attesa_mock::MockCloud;

use crate::helpers::{descriptor, op, resource, waiter};

fn failing_op(name: &str, code: u16, messages: &[&str]) -> Operation {
    let mut operation = op(name, "insert");
    operation.http_error_status_code = Some(code);
    operation.error = Some(OperationError {
        errors: messages
            .iter()
            .map(|message| OperationErrorDetail {
                code: None,
                message: (*message).to_owned(),
            })
            .collect(),
    });
    operation
}

#[tokio::test(start_paused = true)]
async fn failed_operation_records_every_detail_and_yields_nothing() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(failing_op("A", 409, &["already exists", "second entry"]), 1)
            .resource(resource("A"))
            .build(),
    );
    let waiter = waiter(cloud.clone(), 30);

    let report = waiter
        .wait_all(vec![descriptor(op("A", "insert"))])
        .await;

    assert!(report.resources.is_empty());
    assert_eq!(report.errors.len(), 2);
    assert!(report
        .errors
        .iter()
        .all(|e| matches!(e, AttesaError::Operation { http_status: Some(409), .. })));
    // a failed operation must never be fetched
    assert!(
        cloud
            .requests()
            .iter()
            .all(|request| matches!(request, attesa::BatchRequest::GetOperation(_)))
    );
}

#[tokio::test(start_paused = true)]
async fn transport_failure_lands_in_the_error_collection() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 1)
            .fail_resource("A", 500, "backend unavailable")
            .build(),
    );
    let waiter = waiter(cloud, 30);

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.resources.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(
        &report.errors[0],
        AttesaError::Transport {
            http_status: Some(500),
            message,
        } if message == "backend unavailable"
    ));
}

#[tokio::test(start_paused = true)]
async fn one_failure_does_not_stop_the_others() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(failing_op("A", 409, &["already exists"]), 1)
            .operation(op("B", "insert"), 1)
            .resource(resource("B"))
            .build(),
    );
    let waiter = waiter(cloud, 30);

    let report = waiter
        .wait_all(vec![
            descriptor(op("A", "insert")),
            descriptor(op("B", "insert")),
        ])
        .await;

    assert_eq!(report.resources.len(), 1);
    assert_eq!(report.resources[0].self_link, "res/B");
    assert_eq!(report.errors.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn http_200_with_no_error_payload_is_success() {
    let mut ambiguous = op("A", "insert");
    ambiguous.http_error_status_code = Some(200);

    let cloud = Arc::new(
        MockCloud::builder()
            .operation(ambiguous, 1)
            .resource(resource("A"))
            .build(),
    );
    let waiter = waiter(cloud, 30);

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete());
    assert_eq!(report.resources.len(), 1);
}
