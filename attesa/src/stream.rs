//! The lazy sequence of resources produced by a wait.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use attesa_core::{Executor, ProgressReporter};
use attesa_types::{
    AttesaError, Operation, OperationDescriptor, Resource, WaitReport, WaiterConfig, labels_for,
};
use tokio::time::Instant;

use crate::round::{partition_replies, plan_round};

/// Lazy, finite, non-restartable sequence of resources from one wait.
///
/// Produced by [`crate::Waiter::wait`]. Each call to [`next`](Self::next)
/// pulls the next available resource, driving polling rounds as needed;
/// resources arrive in discovery order (reply order within a round,
/// completion order across rounds). Once `next` returns `None` the
/// [`warnings`](Self::warnings) and [`errors`](Self::errors) collections are
/// fully populated. Dropping the stream mid-iteration abandons the wait;
/// nothing needs explicit release.
pub struct WaitStream {
    executor: Arc<dyn Executor>,
    reporter: Arc<dyn ProgressReporter>,
    config: WaiterConfig,
    descriptors: HashMap<String, OperationDescriptor>,
    unfinished: Vec<Operation>,
    ready: VecDeque<Resource>,
    warnings: Vec<String>,
    errors: Vec<AttesaError>,
    started: Instant,
    sleep_for: Duration,
    sleep_pending: bool,
    finished: bool,
}

impl WaitStream {
    pub(crate) fn new(
        executor: Arc<dyn Executor>,
        reporter: Arc<dyn ProgressReporter>,
        config: WaiterConfig,
        descriptors: Vec<OperationDescriptor>,
    ) -> Self {
        let unfinished: Vec<Operation> = descriptors
            .iter()
            .map(|descriptor| descriptor.operation.clone())
            .collect();
        let descriptors: HashMap<String, OperationDescriptor> = descriptors
            .into_iter()
            .map(|descriptor| (descriptor.operation.self_link.clone(), descriptor))
            .collect();
        let finished = unfinished.is_empty();
        Self {
            executor,
            reporter,
            config,
            descriptors,
            unfinished,
            ready: VecDeque::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            started: Instant::now(),
            sleep_for: Duration::ZERO,
            sleep_pending: false,
            finished,
        }
    }

    /// Pull the next resource, polling the service as needed.
    ///
    /// Returns `None` once every operation has reached a terminal state (or
    /// the timeout elapsed) and all fetched resources have been consumed.
    pub async fn next(&mut self) -> Option<Resource> {
        loop {
            if let Some(resource) = self.ready.pop_front() {
                return Some(resource);
            }
            if self.finished {
                return None;
            }
            self.advance().await;
        }
    }

    /// Drive one polling round: tick, plan, execute, partition, then decide
    /// whether the wait is over.
    pub(crate) async fn advance(&mut self) {
        // the inter-round sleep is deferred to here so resources discovered
        // last round were yielded without delay
        if self.sleep_pending {
            self.sleep_pending = false;
            self.sleep_for = std::cmp::min(
                self.sleep_for + Duration::from_secs(1),
                self.config.max_poll_interval,
            );
            tokio::time::sleep(self.sleep_for).await;
        }

        self.reporter.tick();
        let plan = plan_round(&self.unfinished, &self.descriptors);
        self.warnings.extend(plan.warnings);
        self.errors.extend(plan.errors);
        for line in &plan.status_lines {
            self.reporter.status(line);
        }
        if plan.requests.is_empty() {
            // every remaining operation finished without anything to fetch
            self.finished = true;
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(requests = plan.requests.len(), "executing polling round");

        let outcome = partition_replies(self.executor.execute(plan.requests).await);
        self.errors.extend(outcome.errors);
        self.ready.extend(outcome.resources);
        self.unfinished = outcome.still_pending;

        if self.unfinished.is_empty() {
            self.finished = true;
            return;
        }
        if self.started.elapsed() > self.config.timeout {
            self.errors.push(self.timeout_error());
            self.finished = true;
            return;
        }
        self.sleep_pending = true;
    }

    /// The single aggregate entry recorded when the deadline passes.
    fn timeout_error(&self) -> AttesaError {
        let action = self
            .unfinished
            .first()
            .map(|operation| labels_for(&operation.operation_type).present)
            .unwrap_or("update");
        AttesaError::Timeout {
            action: action.to_owned(),
            after: self.config.timeout,
            target_links: self
                .unfinished
                .iter()
                .map(|operation| operation.display_link().to_owned())
                .collect(),
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    /// Non-fatal messages collected so far; complete once the stream ended.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Fatal per-operation, transport, and timeout entries collected so far;
    /// complete once the stream ended.
    #[must_use]
    pub fn errors(&self) -> &[AttesaError] {
        &self.errors
    }

    /// Consume the stream into a [`WaitReport`].
    ///
    /// `resources` holds whatever has not already been taken via
    /// [`next`](Self::next); callers who want the full set in the report
    /// should drain through [`crate::Waiter::wait_all`] instead of mixing
    /// the two styles.
    #[must_use]
    pub fn into_report(self) -> WaitReport {
        WaitReport {
            resources: self.ready.into_iter().collect(),
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}
