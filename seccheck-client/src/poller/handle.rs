//! Handle to a background poll

use seccheck_core::domain::job::JobHandle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::progress::PollProgress;
use crate::error::{ClientError, Result};

/// A poll running on a background task
///
/// Await [`outcome`](Self::outcome) for the result, or call
/// [`cancel`](Self::cancel) to abandon the job. Dropping the handle cancels
/// the poll too.
#[derive(Debug)]
pub struct PollHandle<T> {
    job: JobHandle,
    cancel: CancellationToken,
    progress: watch::Receiver<PollProgress>,
    task: JoinHandle<Option<Result<T>>>,
    guard: DropGuard,
}

impl<T> PollHandle<T> {
    pub(super) fn new(
        job: JobHandle,
        cancel: CancellationToken,
        progress: watch::Receiver<PollProgress>,
        task: JoinHandle<Option<Result<T>>>,
    ) -> Self {
        let guard = cancel.clone().drop_guard();
        Self {
            job,
            cancel,
            progress,
            task,
            guard,
        }
    }

    /// The job being polled
    pub fn job(&self) -> JobHandle {
        self.job
    }

    /// Stops the poll; no check is issued after this returns
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the background task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Watch channel updated after every status check
    pub fn progress(&self) -> watch::Receiver<PollProgress> {
        self.progress.clone()
    }

    /// Waits for the poll to settle
    ///
    /// Returns `None` if the poll was cancelled, even when the job had already
    /// settled by the time [`cancel`](Self::cancel) was called.
    pub async fn outcome(self) -> Option<Result<T>> {
        let Self {
            cancel, task, guard, ..
        } = self;

        let settled = match task.await {
            Ok(settled) => settled,
            Err(e) if e.is_cancelled() => None,
            Err(e) => Some(Err(ClientError::Internal(format!("poll task failed: {}", e)))),
        };

        let settled = if cancel.is_cancelled() { None } else { settled };
        drop(guard);
        settled
    }
}
