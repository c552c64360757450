//! Deferred completion tasks.
//!
//! A [`ScheduledTask`] runs a callback once after a fixed delay on a Tokio
//! runtime. Dropping the handle detaches the task; only [`ScheduledTask::cancel`]
//! stops it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
    due: Instant,
}

impl ScheduledTask {
    /// Schedule `callback` to run on `runtime` once `delay` has elapsed.
    pub fn after<F>(runtime: &Handle, delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let due = Instant::now() + delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(due).await;
            callback();
        });
        Self { handle, due }
    }

    /// When the callback becomes eligible to run.
    #[must_use]
    pub const fn due(&self) -> Instant {
        self.due
    }

    /// Whether the callback has run or the task was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the task. The callback will not run unless it already started.
    pub fn cancel(self) {
        self.handle.abort();
    }
}
