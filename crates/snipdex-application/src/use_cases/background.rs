//! Background Persistence
//!
//! Owns the detached tasks that index submitted snippets. The request path
//! only spawns into it and never observes a task's outcome; the tracker
//! exists so shutdown can drain in-flight writes and tests can wait for
//! them to land.

use std::future::Future;
use std::time::Duration;

use tokio_util::task::TaskTracker;
use tracing::warn;

/// Spawner and tracker for fire-and-forget persistence tasks
#[derive(Debug, Clone)]
pub struct BackgroundPersister {
    tracker: TaskTracker,
    task_timeout: Duration,
}

impl BackgroundPersister {
    /// Create a persister whose tasks are each cut off after `task_timeout`
    pub fn new(task_timeout: Duration) -> Self {
        Self {
            tracker: TaskTracker::new(),
            task_timeout,
        }
    }

    /// Spawn a persistence task for `submission_id`
    ///
    /// Returns immediately. The task handles its own failures; exceeding the
    /// deadline drops it and logs a warning.
    pub fn spawn<F>(&self, submission_id: String, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task_timeout = self.task_timeout;
        self.tracker.spawn(async move {
            if tokio::time::timeout(task_timeout, task).await.is_err() {
                warn!(
                    submission_id = %submission_id,
                    timeout_secs = task_timeout.as_secs(),
                    "Snippet indexing timed out"
                );
            }
        });
    }

    /// Number of persistence tasks still running
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait until every task spawned so far has finished
    ///
    /// The persister keeps accepting tasks afterwards.
    pub async fn settle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    /// Wait for in-flight tasks for at most `limit`
    ///
    /// Returns `true` when everything finished in time. Tasks still running
    /// after the limit are abandoned.
    pub async fn drain(&self, limit: Duration) -> bool {
        let pending = self.in_flight();
        if tokio::time::timeout(limit, self.settle()).await.is_ok() {
            true
        } else {
            self.tracker.reopen();
            warn!(
                pending,
                remaining = self.in_flight(),
                "Shutdown drain expired with indexing tasks still running"
            );
            false
        }
    }
}
