//! Text structuring of diagnosis narratives.
//!
//! Turns the free-text fields of a [`Diagnosis`](crate::models::Diagnosis)
//! into an ordered treatment plan and a care checklist, and classifies the
//! issue label. All functions are pure and total.

mod report;

pub use report::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intake::split_items;

/// Boundaries between treatment steps.
pub const TREATMENT_DELIMITERS: &[char] = &['.', '\n'];

/// Boundaries between care checklist items.
pub const CARE_DELIMITERS: &[char] = &['.', ',', '\n'];

/// Issue label substrings that mark a diagnosis as serious.
///
/// Matching is literal: "infestation" does not contain "pest" and "fungal"
/// does not contain "infection", so such labels classify as routine.
pub const SERIOUS_KEYWORDS: &[&str] = &["infection", "rot", "pest"];

/// Binary urgency of a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Serious,
    Routine,
}

impl Severity {
    pub fn is_serious(&self) -> bool {
        matches!(self, Severity::Serious)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Serious => f.write_str("serious"),
            Severity::Routine => f.write_str("routine"),
        }
    }
}

/// Split a treatment narrative into ordered steps.
pub fn structure_treatment(text: &str) -> Vec<String> {
    split_items(text, TREATMENT_DELIMITERS)
}

/// Split a care narrative into checklist items.
pub fn structure_care(text: &str) -> Vec<String> {
    split_items(text, CARE_DELIMITERS)
}

/// Classify an issue label by keyword, case-insensitively.
pub fn classify_severity(issue: &str) -> Severity {
    let lower = issue.to_lowercase();
    if SERIOUS_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        Severity::Serious
    } else {
        Severity::Routine
    }
}

/// One-sentence explanation shown above the treatment plan.
pub fn explain_issue(issue: &str) -> String {
    format!(
        "Based on the symptoms you described, your plant is showing signs of {}. \
         This is a common issue that can be addressed with proper care adjustments.",
        issue.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_structure_treatment_sentences() {
        let steps = structure_treatment(
            "Remove affected leaves. Reduce watering frequency. Improve air circulation.",
        );
        assert_eq!(
            steps,
            vec![
                "Remove affected leaves",
                "Reduce watering frequency",
                "Improve air circulation"
            ]
        );
    }

    #[test]
    fn test_structure_treatment_keeps_commas() {
        let steps = structure_treatment("Trim roots, then repot\nWater lightly");
        assert_eq!(steps, vec!["Trim roots, then repot", "Water lightly"]);
    }

    #[test]
    fn test_structure_care_splits_commas() {
        let items = structure_care("Water weekly, mist leaves. Rotate the pot");
        assert_eq!(items, vec!["Water weekly", "mist leaves", "Rotate the pot"]);
    }

    #[test]
    fn test_empty_and_undelimited_text() {
        assert!(structure_care("").is_empty());
        assert!(structure_treatment("").is_empty());
        assert!(structure_treatment(" ..\n. ").is_empty());
        assert_eq!(structure_treatment("  Repot now  "), vec!["Repot now"]);
    }

    #[test]
    fn test_adjacent_delimiters_collapse() {
        assert_eq!(
            structure_treatment("Stop watering... Wait a week.\n\nCheck soil"),
            vec!["Stop watering", "Wait a week", "Check soil"]
        );
    }

    #[test]
    fn test_classify_severity() {
        assert_eq!(classify_severity("Root Rot"), Severity::Serious);
        assert_eq!(classify_severity("Bacterial INFECTION"), Severity::Serious);
        assert_eq!(classify_severity("Pest damage"), Severity::Serious);
        assert_eq!(classify_severity("Underwatering"), Severity::Routine);
        assert_eq!(classify_severity(""), Severity::Routine);
    }

    #[test]
    fn test_classify_severity_literal_gap() {
        // Literal keyword match: related labels without the exact substrings stay routine
        assert_eq!(classify_severity("Spider Mite Infestation"), Severity::Routine);
        assert_eq!(classify_severity("Fungal Leaf Spot"), Severity::Routine);
    }

    #[test]
    fn test_explain_issue_lowercases() {
        let text = explain_issue("Root Rot");
        assert!(text.contains("showing signs of root rot."));
    }

    proptest! {
        #[test]
        fn test_structured_items_are_trimmed(text in "[A-Za-z .,\n]{0,80}") {
            for item in structure_treatment(&text).iter().chain(structure_care(&text).iter()) {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
                prop_assert!(!item.contains('.') && !item.contains('\n'));
            }
        }
    }
}
