//! Plant observation models: the editable intake draft and the normalized
//! observation submitted for diagnosis.

use std::fmt;

use edenmind_service::PlantInfo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::plant::{LightEnvironment, PlantKind, WateringFrequency};
use crate::intake;

/// A required observation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
pub enum MissingField {
    Name,
    Kind,
    Environment,
    WateringFrequency,
    Symptoms,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissingField::Name => "plant name",
            MissingField::Kind => "plant type",
            MissingField::Environment => "light exposure",
            MissingField::WateringFrequency => "watering frequency",
            MissingField::Symptoms => "symptoms",
        };
        f.write_str(label)
    }
}

/// An observation could not be built because fields are empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct IncompleteObservation {
    pub missing: Vec<MissingField>,
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A normalized, submittable plant observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantObservation {
    /// User-chosen label for the plant
    pub name: String,
    pub kind: PlantKind,
    pub environment: LightEnvironment,
    pub watering_frequency: WateringFrequency,
    /// Ordered, non-empty symptom tokens
    pub symptoms: Vec<String>,
}

impl PlantObservation {
    /// Build an observation from raw symptom text.
    pub fn new(
        name: impl Into<String>,
        kind: PlantKind,
        environment: LightEnvironment,
        watering_frequency: WateringFrequency,
        raw_symptoms: &str,
    ) -> Result<Self, IncompleteObservation> {
        ObservationDraft {
            name: name.into(),
            kind: Some(kind),
            environment: Some(environment),
            watering_frequency: Some(watering_frequency),
            symptoms: raw_symptoms.to_string(),
        }
        .to_observation()
    }

    /// Convert to the diagnosis service's wire shape.
    pub fn to_plant_info(&self) -> PlantInfo {
        PlantInfo {
            name: self.name.clone(),
            plant_type: self.kind.as_wire().to_string(),
            environment: self.environment.as_wire().to_string(),
            symptoms: self.symptoms.clone(),
            watering_habits: self.watering_frequency.as_wire().to_string(),
        }
    }
}

/// The intake form as the user is editing it.
///
/// The default draft is the empty form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservationDraft {
    pub name: String,
    pub kind: Option<PlantKind>,
    pub environment: Option<LightEnvironment>,
    pub watering_frequency: Option<WateringFrequency>,
    /// Raw symptom text, split on submit
    pub symptoms: String,
}

impl ObservationDraft {
    /// The symptom list the current text normalizes to.
    pub fn normalized_symptoms(&self) -> Vec<String> {
        intake::normalize_symptoms(&self.symptoms)
    }

    /// Fields that still need a value.
    pub fn missing_fields(&self) -> Vec<MissingField> {
        intake::missing_fields(
            &self.name,
            self.kind,
            self.environment,
            self.watering_frequency,
            &self.normalized_symptoms(),
        )
    }

    /// Check if the draft may be submitted.
    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Normalize the draft into a submittable observation.
    pub fn to_observation(&self) -> Result<PlantObservation, IncompleteObservation> {
        let symptoms = self.normalized_symptoms();

        match (self.kind, self.environment, self.watering_frequency) {
            (Some(kind), Some(environment), Some(watering_frequency))
                if !self.name.is_empty() && !symptoms.is_empty() =>
            {
                Ok(PlantObservation {
                    name: self.name.clone(),
                    kind,
                    environment,
                    watering_frequency,
                    symptoms,
                })
            }
            _ => Err(IncompleteObservation {
                missing: self.missing_fields(),
            }),
        }
    }

    /// Clear every field back to the empty form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
