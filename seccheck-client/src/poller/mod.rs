//! Status poller
//!
//! Turns a stream of status checks for one job into a single outcome. The
//! first check is issued immediately; while the job is pending the poller
//! waits `interval` and checks again, up to `max_attempts` checks in total.
//! A check that fails at the transport, API or decode level ends the poll
//! with that error: it is not retried.

mod handle;
pub mod machine;
pub mod progress;
pub mod source;

pub use handle::PollHandle;
pub use machine::{PollMachine, PollState, Transition};
pub use progress::{Observable, Observation, PollProgress};
pub use source::{FileAnalysisStatusSource, StatusSource, WebScanStatusSource};

use std::future::Future;
use std::sync::Arc;

use seccheck_core::domain::job::JobHandle;
use serde_json::Value;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::PollConfig;
use crate::error::{ClientError, Result};

/// Polls job status with a fixed cadence and attempt budget
///
/// A poller holds only its configuration; every call to [`poll`](Self::poll)
/// or [`spawn`](Self::spawn) runs an independent poll operation.
#[derive(Debug, Clone, Copy)]
pub struct StatusPoller {
    config: PollConfig,
}

impl StatusPoller {
    /// Creates a poller, rejecting invalid configuration before any check
    pub fn new(config: PollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> PollConfig {
        self.config
    }

    /// Polls `job` until it completes, fails, or the attempt budget runs out
    pub async fn poll<F, Fut, O>(&self, job: JobHandle, check: F) -> Result<O::Payload>
    where
        F: FnMut(JobHandle) -> Fut,
        Fut: Future<Output = Result<O>>,
        O: Observable,
    {
        let cancel = CancellationToken::new();
        self.poll_until_cancelled(job, check, &cancel)
            .await
            .unwrap_or_else(|| Err(ClientError::Internal("poll stopped without settling".into())))
    }

    /// Like [`poll`](Self::poll), but stops as soon as `cancel` fires
    ///
    /// Returns `None` when cancelled: no further check is issued and the
    /// pending wait is dropped.
    pub async fn poll_until_cancelled<F, Fut, O>(
        &self,
        job: JobHandle,
        check: F,
        cancel: &CancellationToken,
    ) -> Option<Result<O::Payload>>
    where
        F: FnMut(JobHandle) -> Fut,
        Fut: Future<Output = Result<O>>,
        O: Observable,
    {
        let (progress, _) = watch::channel(PollProgress::default());
        drive(self.config, job, check, cancel, &progress).await
    }

    /// Runs the poll on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut, O>(&self, job: JobHandle, check: F) -> PollHandle<O::Payload>
    where
        F: FnMut(JobHandle) -> Fut + Send + 'static,
        Fut: Future<Output = Result<O>> + Send,
        O: Observable + Send,
        O::Payload: Send + 'static,
    {
        let cancel = CancellationToken::new();
        let (progress_tx, progress_rx) = watch::channel(PollProgress::default());
        let config = self.config;
        let token = cancel.clone();

        let task =
            tokio::spawn(async move { drive(config, job, check, &token, &progress_tx).await });

        PollHandle::new(job, cancel, progress_rx, task)
    }

    /// Runs the poll on a background task against a [`StatusSource`]
    pub fn spawn_source(&self, job: JobHandle, source: Arc<dyn StatusSource>) -> PollHandle<Value> {
        self.spawn(job, move |job| {
            let source = Arc::clone(&source);
            async move { source.check_status(job).await }
        })
    }
}

/// Polls `job` with `check` under `config`
///
/// Invalid configuration is reported before the first check is issued.
pub async fn poll_status<F, Fut, O>(
    job: JobHandle,
    check: F,
    config: PollConfig,
) -> Result<O::Payload>
where
    F: FnMut(JobHandle) -> Fut,
    Fut: Future<Output = Result<O>>,
    O: Observable,
{
    StatusPoller::new(config)?.poll(job, check).await
}

/// Drives one poll operation to settlement or cancellation
async fn drive<F, Fut, O>(
    config: PollConfig,
    job: JobHandle,
    mut check: F,
    cancel: &CancellationToken,
    progress: &watch::Sender<PollProgress>,
) -> Option<Result<O::Payload>>
where
    F: FnMut(JobHandle) -> Fut,
    Fut: Future<Output = Result<O>>,
    O: Observable,
{
    let mut machine = match PollMachine::new(config) {
        Ok(machine) => machine,
        Err(e) => return Some(Err(e)),
    };
    let mut attempts = 0;

    let settled = loop {
        if cancel.is_cancelled() || !machine.begin_check() {
            break None;
        }
        attempts = machine.attempts();
        debug!(%job, attempt = attempts, "Checking job status");

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break None,
            result = async { check(job).await } => result,
        };

        let status = match result {
            Ok(observed) => {
                let observation = observed.into_observation();
                publish(progress, attempts, observation.progress);
                Ok(observation.status)
            }
            Err(e) => {
                publish(progress, attempts, None);
                Err(e)
            }
        };

        match machine.on_result(status) {
            Transition::Wait(delay) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break None,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            Transition::Settle(outcome) => break Some(outcome),
            Transition::Ignored => break None,
        }
    };

    match &settled {
        None => {
            machine.cancel();
            debug!(%job, attempts, "Poll cancelled");
        }
        Some(Ok(_)) => info!(%job, attempts, "Job completed"),
        Some(Err(ClientError::PollTimeout { .. })) => {
            warn!(%job, attempts, "Job still pending, giving up")
        }
        Some(Err(e)) if e.is_job_outcome() => info!(%job, attempts, "Job did not complete: {}", e),
        Some(Err(e)) => warn!(%job, attempts, "Status check failed, polling stopped: {}", e),
    }
    progress.send_modify(|p| p.finished = true);

    settled
}

fn publish(progress: &watch::Sender<PollProgress>, attempts: u32, percent: Option<u32>) {
    progress.send_modify(|p| {
        p.attempts = attempts;
        if percent.is_some() {
            p.progress = percent;
        }
    });
}
