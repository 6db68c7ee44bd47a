//! Offline diagnosis service for tests and demos.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::client::{DiagnosisService, ServiceError, ServiceResult};
use crate::wire::{Diagnosis, PlantInfo};

/// One keyword rule of the mock diagnoser.
struct Rule {
    /// Any of these substrings in the lowercased symptom text selects the rule
    keywords: &'static [&'static str],
    /// Watering values that must also match; empty means any
    watering: &'static [&'static str],
    issue: &'static str,
    treatment: &'static str,
    care: &'static str,
}

// Checked in order; the first matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["mushy", "black roots", "soggy", "rotting", "foul smell"],
        watering: &[],
        issue: "Root Rot",
        treatment: "Remove the plant from its pot. Cut away black or mushy roots with sterile shears. \
                    Repot in fresh, well-draining soil.",
        care: "Water only when the top inch of soil is dry, use a pot with drainage holes, \
               empty saucers after watering",
    },
    Rule {
        keywords: &["webbing", "tiny dots", "mites", "stippling"],
        watering: &[],
        issue: "Spider Mites",
        treatment: "Isolate the plant. Rinse foliage with lukewarm water. \
                    Apply insecticidal soap every 5 to 7 days.",
        care: "Raise humidity, inspect leaf undersides weekly, keep the plant away from heaters",
    },
    Rule {
        keywords: &["bugs", "insects", "aphids", "sticky", "scale"],
        watering: &[],
        issue: "Pest Infestation",
        treatment: "Isolate the plant. Wipe leaves with a damp cloth. Treat with neem oil.",
        care: "Check new growth weekly, quarantine new plants, keep leaves dust-free",
    },
    Rule {
        keywords: &["white powder", "powdery", "fuzzy mold"],
        watering: &[],
        issue: "Fungal Infection",
        treatment: "Remove affected leaves. Improve air circulation. Apply a fungicide labelled for houseplants.",
        care: "Avoid wetting the foliage, water in the morning, space plants apart",
    },
    Rule {
        keywords: &["yellow", "drooping", "wilting"],
        watering: &["daily", "every-2-3-days"],
        issue: "Overwatering",
        treatment: "Pause watering until the soil dries out. Remove yellowed leaves. Check the drainage holes.",
        care: "Water when the soil is dry, use a moisture meter, reduce watering in winter",
    },
    Rule {
        keywords: &["crispy", "dry edges", "brown tips", "wilting", "curling"],
        watering: &[],
        issue: "Underwatering",
        treatment: "Water thoroughly until it drains from the bottom. Trim crispy leaf tips.",
        care: "Water on a regular schedule, group plants to raise humidity, mulch the topsoil",
    },
    Rule {
        keywords: &["leggy", "pale", "stretching", "leaning"],
        watering: &[],
        issue: "Insufficient Light",
        treatment: "Move the plant closer to a bright window. Rotate the pot every week.",
        care: "Provide bright indirect light, supplement with a grow light in winter",
    },
];

const FALLBACK: Rule = Rule {
    keywords: &[],
    watering: &[],
    issue: "General Stress",
    treatment: "Check the soil moisture. Inspect the leaves for pests. Keep conditions stable for two weeks.",
    care: "Keep a watering log, avoid moving the plant, observe new growth",
};

/// Most diagnoses the mock remembers; older entries are dropped first.
pub const MOCK_HISTORY_CAP: usize = 64;

/// Deterministic keyword diagnoser with an in-memory history.
///
/// Meant for tests and demos, not as a long-lived service. The history only
/// backs the read operations and keeps the newest [`MOCK_HISTORY_CAP`]
/// diagnoses.
#[derive(Default)]
pub struct MockDiagnosisService {
    history: Mutex<Vec<Diagnosis>>,
}

impl MockDiagnosisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnose plant information without recording it.
    pub fn diagnose(info: &PlantInfo) -> Diagnosis {
        let symptoms = info.symptoms.join("\n").to_lowercase();

        let rule = RULES
            .iter()
            .find(|rule| {
                let symptom_hit = rule.keywords.iter().any(|k| symptoms.contains(k));
                let watering_hit =
                    rule.watering.is_empty() || rule.watering.contains(&info.watering_habits.as_str());
                symptom_hit && watering_hit
            })
            .unwrap_or(&FALLBACK);

        Diagnosis::new(rule.issue, rule.treatment, rule.care)
    }

    fn history(&self) -> std::sync::MutexGuard<'_, Vec<Diagnosis>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DiagnosisService for MockDiagnosisService {
    async fn submit_plant_info(&self, info: PlantInfo) -> ServiceResult<Diagnosis> {
        if info.symptoms.is_empty() {
            return Err(ServiceError::Rejected("No symptoms provided".into()));
        }

        let diagnosis = Self::diagnose(&info);
        tracing::debug!(
            plant_type = %info.plant_type,
            issue = %diagnosis.issue,
            "mock diagnosis produced"
        );
        let mut history = self.history();
        if history.len() >= MOCK_HISTORY_CAP {
            let overflow = history.len() + 1 - MOCK_HISTORY_CAP;
            history.drain(..overflow);
        }
        history.push(diagnosis.clone());
        Ok(diagnosis)
    }

    async fn get_all_diagnoses(&self) -> ServiceResult<Vec<Diagnosis>> {
        Ok(self.history().clone())
    }

    async fn get_diagnosis(&self) -> ServiceResult<Diagnosis> {
        self.history()
            .last()
            .cloned()
            .ok_or_else(|| ServiceError::Rejected("No diagnosis available".into()))
    }

    async fn search_diagnoses_by_issue(&self, issue: &str) -> ServiceResult<Vec<Diagnosis>> {
        let needle = issue.to_lowercase();
        Ok(self
            .history()
            .iter()
            .filter(|d| d.issue.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
