//! Progress sink trait and the reporters shipped with the workspace.

/// Sink for wait progress.
///
/// `tick` fires once per polling round before any requests go out; `status`
/// receives one human-readable line per operation reaching its terminal
/// state (e.g. `Created [https://…/instances/vm-1].`). Either may be called
/// any number of times and must return promptly; blocking here stalls the
/// polling loop.
pub trait ProgressReporter: Send + Sync {
    /// Called once per polling round.
    fn tick(&self);

    /// Receives one completion line per finished operation.
    fn status(&self, line: &str);
}

/// Reporter that discards everything; the default when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn tick(&self) {}

    fn status(&self, _line: &str) {}
}

/// Reporter that forwards ticks at debug level and completion lines at info
/// level through `tracing`.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

#[cfg(feature = "tracing")]
impl ProgressReporter for LogReporter {
    fn tick(&self) {
        tracing::debug!("polling round");
    }

    fn status(&self, line: &str) {
        tracing::info!("{line}");
    }
}
