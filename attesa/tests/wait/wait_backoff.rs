use std::sync::Arc;

use attesa_mock::MockCloud;
use tokio::time::Instant;

use crate::helpers::{descriptor, op, resource, waiter};

// The inter-round sleep is linear: 1s, 2s, 3s... capped at the configured
// poll interval. An operation finishing on its fourth poll costs sleeps of
// 1+2+3 before that poll plus 4 before the fetch round.
#[tokio::test(start_paused = true)]
async fn sleep_schedule_is_linear() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 4)
            .resource(resource("A"))
            .build(),
    );
    let waiter = waiter(cloud, 600);
    let started = Instant::now();

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete());
    assert_eq!(started.elapsed(), std::time::Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn sleep_caps_at_the_poll_interval() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("A", "insert"), 8)
            .resource(resource("A"))
            .build(),
    );
    let waiter = waiter(cloud, 600);
    let started = Instant::now();

    let report = waiter.wait_all(vec![descriptor(op("A", "insert"))]).await;

    assert!(report.is_complete());
    // sleeps: 1+2+3+4+5+5+5 before polls 2..=8, plus a capped 5 before the
    // fetch round
    assert_eq!(started.elapsed(), std::time::Duration::from_secs(30));
}

#[tokio::test(start_paused = true)]
async fn first_round_runs_without_any_sleep() {
    let cloud = Arc::new(
        MockCloud::builder()
            .operation(op("B", "delete"), 1)
            .build(),
    );
    let waiter = waiter(cloud, 600);
    let started = Instant::now();

    // done on the first poll, reported on the second round's plan; only one
    // sleep of 1s separates them
    let report = waiter.wait_all(vec![descriptor(op("B", "delete"))]).await;

    assert!(report.is_complete());
    assert_eq!(started.elapsed(), std::time::Duration::from_secs(1));
}
