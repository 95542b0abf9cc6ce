//! Deterministic in-memory cloud for attesa tests and examples.
//!
//! [`MockCloud`] plays the role of the remote service: it answers
//! `GetOperation` polls from a script ("this operation flips to `DONE` after
//! N polls") and `GetResource` fetches from a fixed set of stored resources,
//! honoring the executor contract of one reply per request in request order.
//! Every request is recorded so tests can assert on the traffic the waiter
//! actually produced.
#![warn(missing_docs)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use attesa_core::{BatchReply, BatchRequest, Executor, Operation, OperationStatus, Resource};

/// One scripted operation: the handle plus when it finishes.
struct ScriptedOperation {
    operation: Operation,
    done_after: u32,
    polls: u32,
}

#[derive(Default)]
struct CloudState {
    operations: HashMap<String, ScriptedOperation>,
    resources: Vec<Resource>,
    failing_resources: HashMap<String, (Option<u16>, String)>,
    requests: Vec<BatchRequest>,
}

/// Deterministic, thread-safe in-memory executor simulating a cloud service.
///
/// Built via [`MockCloud::builder`]. Operations are keyed by their short
/// name; resources are served by the tail of their `self_link`. Anything
/// unknown answers with a 404 [`BatchReply::Failure`].
pub struct MockCloud {
    state: Mutex<CloudState>,
}

impl MockCloud {
    /// Start scripting a new mock cloud.
    #[must_use]
    pub fn builder() -> MockCloudBuilder {
        MockCloudBuilder::default()
    }

    /// Every request executed so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<BatchRequest> {
        self.state.lock().expect("mutex poisoned").requests.clone()
    }

    /// How many times the named operation has been polled.
    #[must_use]
    pub fn poll_count(&self, name: &str) -> u32 {
        self.state
            .lock()
            .expect("mutex poisoned")
            .operations
            .get(name)
            .map_or(0, |scripted| scripted.polls)
    }
}

impl CloudState {
    fn poll_operation(&mut self, name: &str) -> BatchReply {
        let Some(scripted) = self.operations.get_mut(name) else {
            return BatchReply::Failure {
                http_status: Some(404),
                message: format!("no such operation [{name}]"),
            };
        };
        scripted.polls += 1;
        let mut operation = scripted.operation.clone();
        // done_after == 0 means already finished on the first poll
        operation.status = if scripted.polls >= scripted.done_after.max(1) {
            OperationStatus::Done
        } else {
            OperationStatus::Running
        };
        BatchReply::Operation(operation)
    }

    fn fetch_resource(&self, name: &str) -> BatchReply {
        if let Some((http_status, message)) = self.failing_resources.get(name) {
            return BatchReply::Failure {
                http_status: *http_status,
                message: message.clone(),
            };
        }
        self.resources
            .iter()
            .find(|resource| resource.name() == name)
            .map_or_else(
                || BatchReply::Failure {
                    http_status: Some(404),
                    message: format!("no such resource [{name}]"),
                },
                |resource| BatchReply::Resource(resource.clone()),
            )
    }
}

#[async_trait]
impl Executor for MockCloud {
    fn name(&self) -> &'static str {
        "mock-cloud"
    }

    async fn execute(&self, requests: Vec<BatchRequest>) -> Vec<BatchReply> {
        let mut state = self.state.lock().expect("mutex poisoned");
        requests
            .into_iter()
            .map(|request| {
                state.requests.push(request.clone());
                match request {
                    BatchRequest::GetOperation(target) => state.poll_operation(&target.name),
                    BatchRequest::GetResource(target) => state.fetch_resource(&target.name),
                }
            })
            .collect()
    }
}

/// Builder scripting the contents and timing of a [`MockCloud`].
#[derive(Default)]
pub struct MockCloudBuilder {
    operations: Vec<(Operation, u32)>,
    resources: Vec<Resource>,
    failing_resources: Vec<(String, Option<u16>, String)>,
}

impl MockCloudBuilder {
    /// Script an operation that reaches `DONE` after `done_after_polls`
    /// `GetOperation` polls (0 = already done on the first poll).
    ///
    /// The operation's failure fields are returned as scripted once it
    /// finishes, so a failing operation is scripted by setting `error` or
    /// `http_error_status_code` on the handle.
    #[must_use]
    pub fn operation(mut self, operation: Operation, done_after_polls: u32) -> Self {
        self.operations.push((operation, done_after_polls));
        self
    }

    /// Store a resource served for `GetResource` by the tail of its
    /// `self_link`.
    #[must_use]
    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Script a `GetResource` failure for the named resource.
    #[must_use]
    pub fn fail_resource(
        mut self,
        name: impl Into<String>,
        http_status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.failing_resources
            .push((name.into(), Some(http_status), message.into()));
        self
    }

    /// Finish scripting.
    #[must_use]
    pub fn build(self) -> MockCloud {
        let mut state = CloudState::default();
        for (operation, done_after) in self.operations {
            state.operations.insert(
                operation.short_name().to_owned(),
                ScriptedOperation {
                    operation,
                    done_after,
                    polls: 0,
                },
            );
        }
        state.resources = self.resources;
        for (name, http_status, message) in self.failing_resources {
            state.failing_resources.insert(name, (http_status, message));
        }
        MockCloud {
            state: Mutex::new(state),
        }
    }
}
