use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A delayed action that is tied to an owning token.
///
/// The action runs once after `delay` unless the task, or the token it was spawned from, is
/// cancelled first. Must be spawned from inside a Tokio runtime.
#[derive(Debug)]
pub struct ScheduledTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn<F>(
        parent: &CancellationToken,
        delay: Duration,
        action: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let token = parent.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {},
                _ = tokio::time::sleep(delay) => action(),
            }
        });

        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
