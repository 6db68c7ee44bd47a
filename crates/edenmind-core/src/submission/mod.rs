//! Submission of observations to the diagnosis service.
//!
//! [`SubmissionTracker`] is the caller-driven state machine;
//! [`SubmissionOrchestrator`] drives it around one async service call;
//! [`ServiceConnection`] is the owned handle to the service.

mod connection;
mod orchestrator;
mod tracker;

pub use connection::*;
pub use orchestrator::*;
pub use tracker::*;

use edenmind_service::ServiceError;
use thiserror::Error;

use crate::models::IncompleteObservation;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze plant. Please try again.";

/// Submission errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    ValidationIncomplete(#[from] IncompleteObservation),

    #[error("Diagnosis service is not connected yet")]
    ServiceUnavailable,

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("a submission is already pending")]
    AlreadyPending,

    #[error("invalid submission transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },
}

impl From<TransitionError> for SubmitError {
    fn from(e: TransitionError) -> Self {
        match e {
            TransitionError::AlreadyPending => SubmitError::AlreadyPending,
            TransitionError::Invalid { from, to } => SubmitError::InvalidTransition { from, to },
        }
    }
}

impl SubmitError {
    /// The message to show the user.
    ///
    /// Service errors surface their own message verbatim when they have one
    /// and the generic failure message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Service(e) => e
                .message()
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }
}

pub type SubmitResult<T> = Result<T, SubmitError>;
