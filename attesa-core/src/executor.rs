use async_trait::async_trait;

use attesa_types::{CallTarget, Operation, Resource};

/// One request in a polling round's batch.
///
/// Both variants are plain "get" calls; the tag says how the reply must be
/// decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchRequest {
    /// Poll an in-flight operation for its current state.
    GetOperation(CallTarget),
    /// Fetch the resource a finished operation produced.
    GetResource(CallTarget),
}

impl BatchRequest {
    /// Addressing bundle of the request, whichever variant it is.
    #[must_use]
    pub fn target(&self) -> &CallTarget {
        match self {
            Self::GetOperation(target) | Self::GetResource(target) => target,
        }
    }
}

/// One reply in a batch, tagged so consumers partition by exhaustive match
/// instead of inspecting wire-level payload types.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchReply {
    /// The polled operation, possibly still in flight.
    Operation(Operation),
    /// The fetched resource.
    Resource(Resource),
    /// The request itself could not be carried out.
    Failure {
        /// HTTP status of the failure, when the transport produced one.
        http_status: Option<u16>,
        /// Human-readable description.
        message: String,
    },
}

/// Capability that executes a round's worth of heterogeneous requests.
///
/// Contract: `execute` returns exactly one reply per request, in request
/// order. A request that cannot be carried out yields
/// [`BatchReply::Failure`] in its slot rather than an error escaping the
/// call; implementations must not panic across this boundary. Executors may
/// fan the requests out concurrently, but the caller sees one joined batch.
#[async_trait]
pub trait Executor: Send + Sync {
    /// A stable identifier for logging and middleware introspection.
    fn name(&self) -> &'static str;

    /// Execute every request in the batch and return slot-aligned replies.
    async fn execute(&self, requests: Vec<BatchRequest>) -> Vec<BatchReply>;
}
