//! Poll state machine
//!
//! Pure transition logic, free of timers and I/O. The async driver in
//! [`super::StatusPoller`] feeds it check results and performs the waits it
//! asks for.

use std::time::Duration;

use seccheck_core::domain::job::JobStatus;

use crate::config::PollConfig;
use crate::error::{ClientError, Result};

/// Lifecycle of one poll operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Created, no check issued yet
    Idle,
    /// A check is in flight or the next one is scheduled
    Checking { attempts: u32 },
    /// Settled or cancelled; nothing leaves this state
    Resolved,
}

/// What the driver must do after a check result
#[derive(Debug)]
pub enum Transition<T> {
    /// Sleep, then issue the next check
    Wait(Duration),
    /// Deliver this outcome and stop
    Settle(Result<T>),
    /// The result arrived when no check was outstanding; drop it
    Ignored,
}

/// State machine for a single poll operation
#[derive(Debug)]
pub struct PollMachine {
    config: PollConfig,
    state: PollState,
    in_flight: bool,
}

impl PollMachine {
    /// Creates a machine in `Idle`, rejecting invalid configuration
    pub fn new(config: PollConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            state: PollState::Idle,
            in_flight: false,
        })
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Number of checks issued so far
    pub fn attempts(&self) -> u32 {
        match self.state {
            PollState::Checking { attempts } => attempts,
            _ => 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.state == PollState::Resolved
    }

    /// Records that a check is being issued
    ///
    /// Returns `false` when no check may be issued: the machine is resolved
    /// or the previous check has not reported yet.
    pub fn begin_check(&mut self) -> bool {
        if self.in_flight {
            return false;
        }

        let attempts = match self.state {
            PollState::Idle => 1,
            PollState::Checking { attempts } => attempts + 1,
            PollState::Resolved => return false,
        };

        self.state = PollState::Checking { attempts };
        self.in_flight = true;
        true
    }

    /// Applies the result of the outstanding check
    pub fn on_result<T>(&mut self, result: Result<JobStatus<T>>) -> Transition<T> {
        let attempts = match self.state {
            PollState::Checking { attempts } if self.in_flight => attempts,
            _ => return Transition::Ignored,
        };
        self.in_flight = false;

        let outcome = match result {
            Err(e) => Err(e),
            Ok(JobStatus::Completed(result)) => Ok(result),
            Ok(JobStatus::Failed(reason)) => Err(ClientError::JobFailed(reason)),
            Ok(JobStatus::Pending) if attempts >= self.config.max_attempts => {
                Err(ClientError::PollTimeout { attempts })
            }
            Ok(JobStatus::Pending) => return Transition::Wait(self.config.interval),
        };

        self.state = PollState::Resolved;
        Transition::Settle(outcome)
    }

    /// Resolves without an outcome
    pub fn cancel(&mut self) {
        self.state = PollState::Resolved;
        self.in_flight = false;
    }
}
