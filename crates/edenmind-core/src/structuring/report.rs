//! Presentation data derived from a diagnosis.

use serde::{Deserialize, Serialize};

use super::{classify_severity, explain_issue, structure_care, structure_treatment, Severity};
use crate::models::Diagnosis;

/// A diagnosis restructured for display: severity-styled header, numbered
/// treatment plan and a care checklist.
///
/// Recomputed from the [`Diagnosis`] whenever needed; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosisReport {
    pub issue: String,
    pub severity: Severity,
    pub explanation: String,
    pub treatment_steps: Vec<String>,
    pub care_items: Vec<String>,
}

impl DiagnosisReport {
    pub fn from_diagnosis(diagnosis: &Diagnosis) -> Self {
        Self {
            issue: diagnosis.issue.clone(),
            severity: classify_severity(&diagnosis.issue),
            explanation: explain_issue(&diagnosis.issue),
            treatment_steps: structure_treatment(&diagnosis.treatment),
            care_items: structure_care(&diagnosis.care_recommendations),
        }
    }

    /// Serialize to JSON for hand-off to a UI layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as Markdown: numbered steps, checkbox list for care.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        let marker = if self.severity.is_serious() { "⚠" } else { "✓" };
        md.push_str(&format!(
            "## {} Diagnosis: {} ({})\n\n",
            marker, self.issue, self.severity
        ));
        md.push_str(&self.explanation);
        md.push_str("\n\n### Treatment Plan\n\n");

        if self.treatment_steps.is_empty() {
            md.push_str("_No treatment steps provided._\n");
        }
        for (i, step) in self.treatment_steps.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, step));
        }

        md.push_str("\n### Ongoing Care Checklist\n\n");

        if self.care_items.is_empty() {
            md.push_str("_No care recommendations provided._\n");
        }
        for item in &self.care_items {
            md.push_str(&format!("- [ ] {}\n", item));
        }

        md
    }
}

impl From<&Diagnosis> for DiagnosisReport {
    fn from(diagnosis: &Diagnosis) -> Self {
        Self::from_diagnosis(diagnosis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_rot() -> Diagnosis {
        Diagnosis::new(
            "Root Rot",
            "Remove the plant from its pot. Trim mushy roots.\nRepot in fresh soil.",
            "Water less often, use a pot with drainage. Empty the saucer",
        )
    }

    #[test]
    fn test_report_from_diagnosis() {
        let report = DiagnosisReport::from_diagnosis(&root_rot());

        assert_eq!(report.severity, Severity::Serious);
        assert_eq!(report.treatment_steps.len(), 3);
        assert_eq!(report.treatment_steps[1], "Trim mushy roots");
        assert_eq!(
            report.care_items,
            vec!["Water less often", "use a pot with drainage", "Empty the saucer"]
        );
    }

    #[test]
    fn test_markdown_numbering_and_checklist() {
        let md = DiagnosisReport::from_diagnosis(&root_rot()).to_markdown();

        assert!(md.starts_with("## ⚠ Diagnosis: Root Rot (serious)"));
        assert!(md.contains("1. Remove the plant from its pot\n"));
        assert!(md.contains("3. Repot in fresh soil\n"));
        assert!(md.contains("- [ ] Empty the saucer\n"));
    }

    #[test]
    fn test_markdown_with_empty_narratives() {
        let report = DiagnosisReport::from_diagnosis(&Diagnosis::new("Underwatering", "", ""));
        let md = report.to_markdown();

        assert!(md.starts_with("## ✓ Diagnosis: Underwatering (routine)"));
        assert!(md.contains("_No treatment steps provided._"));
        assert!(md.contains("_No care recommendations provided._"));
    }

    #[test]
    fn test_to_json_uses_lowercase_severity() {
        let json = DiagnosisReport::from_diagnosis(&root_rot()).to_json().unwrap();
        assert!(json.contains("\"severity\": \"serious\""));
    }
}
