//! Async orchestration of one request/response cycle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use edenmind_service::DiagnosisService;

use super::{
    ServiceConnection, SubmissionPhase, SubmissionState, SubmissionTracker, SubmitError,
    SubmitResult,
};
use crate::models::{Diagnosis, ObservationDraft, PlantObservation};
use crate::structuring::DiagnosisReport;

/// Mediates submissions between an observation and the diagnosis service.
///
/// Owns the single in-flight slot: while a submission is pending, further
/// submissions are rejected with [`SubmitError::AlreadyPending`] and never
/// reach the service. Internal locks are never held across the service
/// call.
pub struct SubmissionOrchestrator {
    connection: Mutex<ServiceConnection>,
    tracker: Mutex<SubmissionTracker>,
}

impl SubmissionOrchestrator {
    pub fn new(connection: ServiceConnection) -> Self {
        Self {
            connection: Mutex::new(connection),
            tracker: Mutex::new(SubmissionTracker::new()),
        }
    }

    /// Attach the live service once the connection collaborator has one.
    pub fn attach(&self, service: Arc<dyn DiagnosisService>) {
        let mut connection = lock(&self.connection);
        connection.attach(service);
        tracing::info!(endpoint = %connection.endpoint(), "diagnosis service attached");
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.connection).is_live()
    }

    /// Validate a draft and submit it.
    ///
    /// An incomplete draft fails with `ValidationIncomplete` without touching
    /// the state machine or the service.
    pub async fn submit_draft(&self, draft: &ObservationDraft) -> SubmitResult<Diagnosis> {
        let observation = draft.to_observation()?;
        self.submit(&observation).await
    }

    /// Submit an observation and wait for the diagnosis.
    ///
    /// Fails with `ServiceUnavailable` when no live connection exists and
    /// propagates service errors unmodified. Either way the state ends in
    /// `Failed` with the surfaced message.
    pub async fn submit(&self, observation: &PlantObservation) -> SubmitResult<Diagnosis> {
        let attempt = match lock(&self.tracker).begin() {
            Ok(attempt) => attempt,
            Err(e) => {
                tracing::warn!(error = %e, "submission rejected");
                return Err(e.into());
            }
        };

        tracing::info!(
            submission_id = %attempt.id,
            started_at = %attempt.started_at,
            plant_kind = %observation.kind,
            symptom_count = observation.symptoms.len(),
            "submitting observation"
        );

        let service = lock(&self.connection).service();
        let result = match service {
            Ok(service) => service
                .submit_plant_info(observation.to_plant_info())
                .await
                .map_err(SubmitError::from),
            Err(e) => Err(e),
        };

        let mut tracker = lock(&self.tracker);
        match result {
            Ok(diagnosis) => {
                tracker.resolve(diagnosis.clone())?;
                tracing::info!(
                    submission_id = %attempt.id,
                    issue = %diagnosis.issue,
                    elapsed_ms = attempt.elapsed_ms(),
                    "diagnosis received"
                );
                Ok(diagnosis)
            }
            Err(e) => {
                let message = tracker.reject(Some(e.user_message()))?;
                tracing::warn!(
                    submission_id = %attempt.id,
                    error = %e,
                    surfaced = %message,
                    elapsed_ms = attempt.elapsed_ms(),
                    "submission failed"
                );
                Err(e)
            }
        }
    }

    /// Start over: discard the diagnosis or error and return to `Idle`.
    pub fn start_over(&self) -> SubmitResult<()> {
        lock(&self.tracker).reset()?;
        tracing::info!("intake reset");
        Ok(())
    }

    pub fn phase(&self) -> SubmissionPhase {
        lock(&self.tracker).phase()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.tracker).state().clone()
    }

    /// The held diagnosis, if the last submission succeeded.
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        lock(&self.tracker).diagnosis().cloned()
    }

    /// The message surfaced for the last failure, if any.
    pub fn error_message(&self) -> Option<String> {
        lock(&self.tracker).error_message().map(str::to_owned)
    }

    /// Presentation data for the held diagnosis.
    pub fn report(&self) -> Option<DiagnosisReport> {
        self.diagnosis().as_ref().map(DiagnosisReport::from_diagnosis)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
