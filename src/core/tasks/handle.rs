use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancellableTask {
    GenerationDebounce,
    Reveal { index: usize },
}

/// Owns one spawned timer. Cancelling fires the token the task listens on and
/// aborts the task; dropping the handle does the same.
#[derive(Debug)]
pub struct TaskHandle {
    kind: CancellableTask,
    cancel_token: CancellationToken,
    join_handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn new(
        kind: CancellableTask,
        cancel_token: CancellationToken,
        join_handle: JoinHandle<()>,
    ) -> Self {
        Self { kind, cancel_token, join_handle: Some(join_handle) }
    }

    pub fn kind(&self) -> CancellableTask {
        self.kind
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
        if let Some(handle) = &self.join_handle {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.as_ref().map(|h| h.is_finished()).unwrap_or(true)
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
