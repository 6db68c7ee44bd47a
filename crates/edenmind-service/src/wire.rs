//! Wire types exchanged with the diagnosis service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reply decoding errors.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid reply format: {0}")]
    InvalidFormat(String),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Plant information as submitted to the service.
///
/// Field names follow the service's camelCase contract; `plant_type` travels
/// as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    pub environment: String,
    pub symptoms: Vec<String>,
    pub watering_habits: String,
}

/// The service's answer for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    /// Short label naming the detected problem, e.g. "Root Rot"
    pub issue: String,
    /// Narrative of remedial steps
    pub treatment: String,
    /// Narrative of ongoing care actions
    pub care_recommendations: String,
}

impl Diagnosis {
    pub fn new(
        issue: impl Into<String>,
        treatment: impl Into<String>,
        care_recommendations: impl Into<String>,
    ) -> Self {
        Self {
            issue: issue.into(),
            treatment: treatment.into(),
            care_recommendations: care_recommendations.into(),
        }
    }
}

/// Decode a raw service reply into a [`Diagnosis`].
///
/// Gateways sometimes wrap the JSON body in log noise or a status prefix, so
/// the outermost `{ ... }` object is located first.
pub fn parse_diagnosis(reply: &str) -> DecodeResult<Diagnosis> {
    let start = reply
        .find('{')
        .ok_or_else(|| DecodeError::InvalidFormat("No JSON object found in reply".into()))?;
    let end = reply
        .rfind('}')
        .ok_or_else(|| DecodeError::InvalidFormat("No closing brace found in reply".into()))?;

    if end < start {
        return Err(DecodeError::InvalidFormat(
            "Closing brace precedes opening brace".into(),
        ));
    }

    let diagnosis: Diagnosis = serde_json::from_str(&reply[start..=end])?;
    Ok(diagnosis)
}

/// Decode a raw service reply holding a list of diagnoses.
pub fn parse_diagnosis_list(reply: &str) -> DecodeResult<Vec<Diagnosis>> {
    let start = reply
        .find('[')
        .ok_or_else(|| DecodeError::InvalidFormat("No JSON array found in reply".into()))?;
    let end = reply
        .rfind(']')
        .ok_or_else(|| DecodeError::InvalidFormat("No closing bracket found in reply".into()))?;

    if end < start {
        return Err(DecodeError::InvalidFormat(
            "Closing bracket precedes opening bracket".into(),
        ));
    }

    Ok(serde_json::from_str(&reply[start..=end])?)
}
