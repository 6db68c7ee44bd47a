//! EdenMind Core Library
//!
//! Plant diagnosis intake, submission and treatment-plan structuring.
//!
//! # Architecture
//!
//! ```text
//! Intake form → ObservationDraft ──normalize──▶ PlantObservation
//!                                                     │
//!                                      SubmissionOrchestrator (Idle → Pending)
//!                                                     │
//!                                      DiagnosisService::submit_plant_info
//!                                                     │
//!                              ┌──────────────────────┴──────────────────────┐
//!                              ▼                                             ▼
//!                     Success(Diagnosis)                             Failed(message)
//!                              │                                      form stays editable
//!                     Text Structuring Engine
//!                 (steps, care checklist, severity)
//!                              │
//!                       DiagnosisReport ──start over──▶ Idle
//! ```
//!
//! # Modules
//!
//! - [`models`]: Observation, draft and plant attribute types
//! - [`intake`]: Symptom normalization and the submittability predicate
//! - [`structuring`]: Treatment/care splitting, severity, report rendering
//! - [`submission`]: State machine, service connection and async orchestrator
//! - [`ffi`]: UniFFI surface for a foreign UI

pub mod config;
pub mod ffi;
pub mod intake;
pub mod logging;
pub mod models;
pub mod structuring;
pub mod submission;

// Re-export commonly used types
pub use config::CoreConfig;
pub use ffi::{EdenMindError, IntakeSession};
pub use models::{
    Diagnosis, LightEnvironment, MissingField, ObservationDraft, PlantInfo, PlantKind,
    PlantObservation, WateringFrequency,
};
pub use structuring::{DiagnosisReport, Severity};
pub use submission::{
    ServiceConnection, SubmissionOrchestrator, SubmissionPhase, SubmissionState,
    SubmissionTracker, SubmitError,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();
