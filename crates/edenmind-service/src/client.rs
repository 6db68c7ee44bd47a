//! The `DiagnosisService` trait: the adapter interface for the remote service.
//!
//! A transport adapter (actor agent, HTTP gateway, test fake) implements this
//! trait. It is object-safe so a connection can hold `Arc<dyn DiagnosisService>`.

use async_trait::async_trait;
use thiserror::Error;

use crate::wire::{DecodeError, Diagnosis, PlantInfo};

/// Errors returned by a diagnosis service call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered with an error message.
    #[error("{0}")]
    Rejected(String),

    /// The call failed and carried no message.
    #[error("diagnosis service call failed")]
    Unspecified,

    /// The reply arrived but could not be decoded.
    #[error("malformed diagnosis reply: {0}")]
    MalformedReply(String),
}

impl ServiceError {
    /// The message to surface to the user, if the error carries one.
    pub fn message(&self) -> Option<String> {
        match self {
            ServiceError::Rejected(msg) if !msg.trim().is_empty() => Some(msg.clone()),
            ServiceError::Rejected(_) | ServiceError::Unspecified => None,
            ServiceError::MalformedReply(_) => Some(self.to_string()),
        }
    }
}

impl From<DecodeError> for ServiceError {
    fn from(e: DecodeError) -> Self {
        ServiceError::MalformedReply(e.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operations exposed by the diagnosis service.
///
/// The intake pipeline only calls [`DiagnosisService::submit_plant_info`];
/// the read operations complete the service surface for other consumers.
#[async_trait]
pub trait DiagnosisService: Send + Sync {
    /// Submit plant information and receive a diagnosis.
    async fn submit_plant_info(&self, info: PlantInfo) -> ServiceResult<Diagnosis>;

    /// All diagnoses the service has produced.
    async fn get_all_diagnoses(&self) -> ServiceResult<Vec<Diagnosis>>;

    /// The most recent diagnosis.
    async fn get_diagnosis(&self) -> ServiceResult<Diagnosis>;

    /// Diagnoses whose issue label matches `issue`.
    async fn search_diagnoses_by_issue(&self, issue: &str) -> ServiceResult<Vec<Diagnosis>>;
}

const _: () = {
    fn _assert_object_safe(_: &dyn DiagnosisService) {}
};
