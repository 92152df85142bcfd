//! Progress reporting for build execution

/// Receives per-step status messages during a build
///
/// The CLI implements this over an indicatif spinner; library consumers and
/// tests can use [`NoopProgress`].
pub trait ProgressCallback {
    /// Called before each step with a short description.
    fn on_step(&self, message: &str);
}

/// Progress callback that discards all messages
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_step(&self, _message: &str) {}
}
