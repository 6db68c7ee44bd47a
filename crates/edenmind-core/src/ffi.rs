//! UniFFI surface for a foreign UI.
//!
//! The foreign side owns transport: it asks an [`IntakeSession`] for the
//! wire payload, performs the call with its own agent, and reports the
//! outcome back. The session keeps the draft and the state machine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use edenmind_service::DecodeError;

use crate::config::CoreConfig;
use crate::models::{
    Diagnosis, IncompleteObservation, LightEnvironment, MissingField, ObservationDraft, PlantInfo,
    PlantKind, WateringFrequency,
};
use crate::structuring::{DiagnosisReport, Severity};
use crate::submission::{SubmissionPhase, SubmissionTracker, SubmitError, TransitionError};
use crate::{intake, logging, structuring};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum EdenMindError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<SubmitError> for EdenMindError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::ValidationIncomplete(_) => EdenMindError::InvalidInput(e.user_message()),
            SubmitError::ServiceUnavailable => EdenMindError::ServiceUnavailable(e.user_message()),
            SubmitError::Service(_) => EdenMindError::ServiceError(e.user_message()),
            SubmitError::AlreadyPending | SubmitError::InvalidTransition { .. } => {
                EdenMindError::InvalidState(e.to_string())
            }
        }
    }
}

impl From<TransitionError> for EdenMindError {
    fn from(e: TransitionError) -> Self {
        SubmitError::from(e).into()
    }
}

impl From<IncompleteObservation> for EdenMindError {
    fn from(e: IncompleteObservation) -> Self {
        EdenMindError::InvalidInput(e.to_string())
    }
}

impl From<DecodeError> for EdenMindError {
    fn from(e: DecodeError) -> Self {
        EdenMindError::SerializationError(e.to_string())
    }
}

impl From<serde_json::Error> for EdenMindError {
    fn from(e: serde_json::Error) -> Self {
        EdenMindError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Free Functions (exported to FFI)
// =========================================================================

/// Install the tracing subscriber using environment configuration.
#[uniffi::export]
pub fn init_logging() {
    logging::init_tracing(&CoreConfig::from_env());
}

/// Split raw symptom text into symptoms.
#[uniffi::export]
pub fn normalize_symptoms(raw: String) -> Vec<String> {
    intake::normalize_symptoms(&raw)
}

/// Split a treatment narrative into numbered steps.
#[uniffi::export]
pub fn structure_treatment(text: String) -> Vec<String> {
    structuring::structure_treatment(&text)
}

/// Split a care narrative into checklist items.
#[uniffi::export]
pub fn structure_care(text: String) -> Vec<String> {
    structuring::structure_care(&text)
}

#[uniffi::export]
pub fn classify_severity(issue: String) -> Severity {
    structuring::classify_severity(&issue)
}

/// Build presentation data for a diagnosis.
#[uniffi::export]
pub fn build_report(diagnosis: FfiDiagnosis) -> FfiDiagnosisReport {
    DiagnosisReport::from_diagnosis(&diagnosis.into()).into()
}

#[uniffi::export]
pub fn render_report_markdown(diagnosis: FfiDiagnosis) -> String {
    DiagnosisReport::from_diagnosis(&diagnosis.into()).to_markdown()
}

#[uniffi::export]
pub fn report_json(diagnosis: FfiDiagnosis) -> Result<String, EdenMindError> {
    Ok(DiagnosisReport::from_diagnosis(&diagnosis.into()).to_json()?)
}

/// Decode a raw service reply.
#[uniffi::export]
pub fn parse_diagnosis_reply(reply: String) -> Result<FfiDiagnosis, EdenMindError> {
    let diagnosis = edenmind_service::parse_diagnosis(&reply)?;
    Ok(diagnosis.into())
}

#[uniffi::export]
pub fn plant_kind_options() -> Vec<FfiSelectOption> {
    PlantKind::ALL
        .iter()
        .map(|k| FfiSelectOption::new(k.as_wire(), k.label()))
        .collect()
}

#[uniffi::export]
pub fn light_environment_options() -> Vec<FfiSelectOption> {
    LightEnvironment::ALL
        .iter()
        .map(|e| FfiSelectOption::new(e.as_wire(), e.label()))
        .collect()
}

#[uniffi::export]
pub fn watering_frequency_options() -> Vec<FfiSelectOption> {
    WateringFrequency::ALL
        .iter()
        .map(|w| FfiSelectOption::new(w.as_wire(), w.label()))
        .collect()
}

// =========================================================================
// Intake Session
// =========================================================================

/// One user's intake form plus its submission state.
#[derive(uniffi::Object, Default)]
pub struct IntakeSession {
    draft: Mutex<ObservationDraft>,
    tracker: Mutex<SubmissionTracker>,
}

#[uniffi::export]
impl IntakeSession {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // =========================================================================
    // Form Fields
    // =========================================================================

    pub fn set_name(&self, name: String) {
        lock(&self.draft).name = name;
    }

    pub fn set_kind(&self, kind: Option<PlantKind>) {
        lock(&self.draft).kind = kind;
    }

    pub fn set_environment(&self, environment: Option<LightEnvironment>) {
        lock(&self.draft).environment = environment;
    }

    pub fn set_watering_frequency(&self, frequency: Option<WateringFrequency>) {
        lock(&self.draft).watering_frequency = frequency;
    }

    pub fn set_symptoms(&self, raw: String) {
        lock(&self.draft).symptoms = raw;
    }

    pub fn missing_fields(&self) -> Vec<MissingField> {
        lock(&self.draft).missing_fields()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        let submittable = lock(&self.draft).is_submittable();
        let phase = lock(&self.tracker).phase();
        submittable && matches!(phase, SubmissionPhase::Idle | SubmissionPhase::Failed)
    }

    // =========================================================================
    // Submission Signals
    // =========================================================================

    pub fn phase(&self) -> SubmissionPhase {
        lock(&self.tracker).phase()
    }

    /// Validate the form and move to `Pending`.
    ///
    /// Returns the payload the caller must send to the diagnosis service.
    pub fn begin_submission(&self) -> Result<FfiPlantInfo, EdenMindError> {
        let observation = lock(&self.draft).to_observation()?;
        let attempt = lock(&self.tracker).begin()?;

        tracing::info!(
            submission_id = %attempt.id,
            plant_kind = %observation.kind,
            symptom_count = observation.symptoms.len(),
            "foreign submission started"
        );
        Ok(observation.to_plant_info().into())
    }

    /// Record the service's diagnosis and return its report.
    pub fn complete_submission(
        &self,
        diagnosis: FfiDiagnosis,
    ) -> Result<FfiDiagnosisReport, EdenMindError> {
        let diagnosis: Diagnosis = diagnosis.into();
        let report = DiagnosisReport::from_diagnosis(&diagnosis);
        lock(&self.tracker).resolve(diagnosis)?;
        Ok(report.into())
    }

    /// Record a failed call; returns the message to display.
    pub fn fail_submission(&self, message: Option<String>) -> Result<String, EdenMindError> {
        let mut tracker = lock(&self.tracker);
        let surfaced = tracker.reject(message)?.to_string();
        tracing::warn!(surfaced = %surfaced, "foreign submission failed");
        Ok(surfaced)
    }

    pub fn error_message(&self) -> Option<String> {
        lock(&self.tracker).error_message().map(str::to_owned)
    }

    pub fn report(&self) -> Option<FfiDiagnosisReport> {
        lock(&self.tracker)
            .diagnosis()
            .map(|d| DiagnosisReport::from_diagnosis(d).into())
    }

    /// Discard the diagnosis and clear the form.
    pub fn start_over(&self) -> Result<(), EdenMindError> {
        lock(&self.tracker).reset()?;
        lock(&self.draft).clear();
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =========================================================================
// FFI Types
// =========================================================================

/// A selector entry: wire value plus display label.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiSelectOption {
    pub value: String,
    pub label: String,
}

impl FfiSelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// FFI-safe service payload.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiPlantInfo {
    pub name: String,
    pub plant_type: String,
    pub environment: String,
    pub symptoms: Vec<String>,
    pub watering_habits: String,
}

impl From<PlantInfo> for FfiPlantInfo {
    fn from(info: PlantInfo) -> Self {
        Self {
            name: info.name,
            plant_type: info.plant_type,
            environment: info.environment,
            symptoms: info.symptoms,
            watering_habits: info.watering_habits,
        }
    }
}

/// FFI-safe diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiDiagnosis {
    pub issue: String,
    pub treatment: String,
    pub care_recommendations: String,
}

impl From<Diagnosis> for FfiDiagnosis {
    fn from(d: Diagnosis) -> Self {
        Self {
            issue: d.issue,
            treatment: d.treatment,
            care_recommendations: d.care_recommendations,
        }
    }
}

impl From<FfiDiagnosis> for Diagnosis {
    fn from(d: FfiDiagnosis) -> Self {
        Diagnosis {
            issue: d.issue,
            treatment: d.treatment,
            care_recommendations: d.care_recommendations,
        }
    }
}

/// FFI-safe diagnosis report.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiDiagnosisReport {
    pub issue: String,
    pub severity: Severity,
    pub explanation: String,
    pub treatment_steps: Vec<String>,
    pub care_items: Vec<String>,
}

impl From<DiagnosisReport> for FfiDiagnosisReport {
    fn from(r: DiagnosisReport) -> Self {
        Self {
            issue: r.issue,
            severity: r.severity,
            explanation: r.explanation,
            treatment_steps: r.treatment_steps,
            care_items: r.care_items,
        }
    }
}
