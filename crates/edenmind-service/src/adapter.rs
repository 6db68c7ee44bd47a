//! Adapter from a raw text transport to [`DiagnosisService`].
//!
//! Gateways that hand back the reply body as text (HTTP bridges, CLI
//! wrappers) implement [`TextTransport`]; [`TextReplyService`] encodes the
//! request, decodes the reply and reports undecodable replies as
//! [`ServiceError::MalformedReply`].

use async_trait::async_trait;

use crate::client::{DiagnosisService, ServiceError, ServiceResult};
use crate::wire::{parse_diagnosis, parse_diagnosis_list, DecodeError, Diagnosis, PlantInfo};

/// Remote method names of the diagnosis service.
pub mod method {
    pub const SUBMIT_PLANT_INFO: &str = "submitPlantInfo";
    pub const GET_ALL_DIAGNOSES: &str = "getAllDiagnoses";
    pub const GET_DIAGNOSIS: &str = "getDiagnosis";
    pub const SEARCH_DIAGNOSES_BY_ISSUE: &str = "searchDiagnosesByIssue";
}

/// A transport that calls a named remote method with a JSON argument and
/// returns the reply body as text.
#[async_trait]
pub trait TextTransport: Send + Sync {
    async fn call(&self, method: &str, argument: String) -> ServiceResult<String>;
}

/// [`DiagnosisService`] over a [`TextTransport`].
pub struct TextReplyService<T> {
    transport: T,
}

impl<T: TextTransport> TextReplyService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn call(&self, name: &str, argument: String) -> ServiceResult<String> {
        let reply = self.transport.call(name, argument).await?;
        tracing::debug!(method = name, reply_len = reply.len(), "service reply received");
        Ok(reply)
    }
}

fn encode<S: serde::Serialize>(value: &S) -> ServiceResult<String> {
    serde_json::to_string(value).map_err(|e| ServiceError::from(DecodeError::from(e)))
}

#[async_trait]
impl<T: TextTransport> DiagnosisService for TextReplyService<T> {
    async fn submit_plant_info(&self, info: PlantInfo) -> ServiceResult<Diagnosis> {
        let reply = self.call(method::SUBMIT_PLANT_INFO, encode(&info)?).await?;
        Ok(parse_diagnosis(&reply)?)
    }

    async fn get_all_diagnoses(&self) -> ServiceResult<Vec<Diagnosis>> {
        let reply = self.call(method::GET_ALL_DIAGNOSES, "null".into()).await?;
        Ok(parse_diagnosis_list(&reply)?)
    }

    async fn get_diagnosis(&self) -> ServiceResult<Diagnosis> {
        let reply = self.call(method::GET_DIAGNOSIS, "null".into()).await?;
        Ok(parse_diagnosis(&reply)?)
    }

    async fn search_diagnoses_by_issue(&self, issue: &str) -> ServiceResult<Vec<Diagnosis>> {
        let reply = self
            .call(method::SEARCH_DIAGNOSES_BY_ISSUE, encode(&issue)?)
            .await?;
        Ok(parse_diagnosis_list(&reply)?)
    }
}
