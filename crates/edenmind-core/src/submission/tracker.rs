//! Submission state machine.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::GENERIC_FAILURE_MESSAGE;
use crate::models::Diagnosis;

/// The phase of the current submission, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Success,
    Failed,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Pending => "pending",
            SubmissionPhase::Success => "success",
            SubmissionPhase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// The current submission state with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Form shown, nothing in flight
    #[default]
    Idle,
    /// One request in flight
    Pending,
    /// Diagnosis received; results shown
    Success(Diagnosis),
    /// Last attempt failed; form still editable
    Failed(String),
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Pending => SubmissionPhase::Pending,
            SubmissionState::Success(_) => SubmissionPhase::Success,
            SubmissionState::Failed(_) => SubmissionPhase::Failed,
        }
    }
}

/// A rejected state-machine signal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a submission is already pending")]
    AlreadyPending,

    #[error("invalid submission transition: {from} -> {to}")]
    Invalid {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },
}

/// Identity of one submission attempt, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub id: Uuid,
    /// Wall-clock start, for logs only
    pub started_at: DateTime<Utc>,
    started: Instant,
}

impl Attempt {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Milliseconds since the attempt started, on the monotonic clock.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// The submission state machine, driven by caller signals.
///
/// Enforces the transition graph:
///
/// ```text
/// idle    -> pending   (begin)
/// failed  -> pending   (begin, resubmit after an error)
/// pending -> success   (resolve)
/// pending -> failed    (reject)
/// success -> idle      (reset, start over)
/// failed  -> idle      (reset)
/// idle    -> idle      (reset)
/// ```
///
/// `begin` while pending is rejected with [`TransitionError::AlreadyPending`];
/// any other signal off the graph is [`TransitionError::Invalid`]. A rejected
/// signal leaves the state untouched.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    state: SubmissionState,
    attempt: Option<Attempt>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `from -> to` is an edge of the state graph.
    pub fn is_valid_transition(from: SubmissionPhase, to: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (from, to),
            (Idle, Pending)
                | (Failed, Pending)
                | (Pending, Success)
                | (Pending, Failed)
                | (Success, Idle)
                | (Failed, Idle)
                | (Idle, Idle)
        )
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.state.phase()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == SubmissionPhase::Pending
    }

    /// The held diagnosis, present only in `Success`.
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match &self.state {
            SubmissionState::Success(diagnosis) => Some(diagnosis),
            _ => None,
        }
    }

    /// The surfaced error message, present only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The attempt currently in flight or last completed.
    pub fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    /// Signal that a submission is about to be dispatched.
    pub fn begin(&mut self) -> Result<Attempt, TransitionError> {
        self.check(SubmissionPhase::Pending)?;
        let attempt = Attempt::start();
        self.attempt = Some(attempt);
        self.state = SubmissionState::Pending;
        tracing::debug!(submission_id = %attempt.id, "submission pending");
        Ok(attempt)
    }

    /// Signal that the service answered with a diagnosis.
    pub fn resolve(&mut self, diagnosis: Diagnosis) -> Result<(), TransitionError> {
        self.check(SubmissionPhase::Success)?;
        self.state = SubmissionState::Success(diagnosis);
        tracing::debug!("submission succeeded");
        Ok(())
    }

    /// Signal that the submission failed.
    ///
    /// A missing or blank `message` is replaced by the generic failure
    /// message. Returns the message now surfaced to the user.
    pub fn reject(&mut self, message: Option<String>) -> Result<&str, TransitionError> {
        self.check(SubmissionPhase::Failed)?;
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        tracing::debug!(%message, "submission failed");
        self.state = SubmissionState::Failed(message);
        Ok(self.error_message().unwrap_or(GENERIC_FAILURE_MESSAGE))
    }

    /// Start over: drop any diagnosis or error and return to the empty form.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.check(SubmissionPhase::Idle)?;
        self.state = SubmissionState::Idle;
        self.attempt = None;
        tracing::debug!("submission reset");
        Ok(())
    }

    fn check(&self, to: SubmissionPhase) -> Result<(), TransitionError> {
        let from = self.phase();
        if from == SubmissionPhase::Pending && to == SubmissionPhase::Pending {
            return Err(TransitionError::AlreadyPending);
        }
        if !Self::is_valid_transition(from, to) {
            return Err(TransitionError::Invalid { from, to });
        }
        Ok(())
    }
}
