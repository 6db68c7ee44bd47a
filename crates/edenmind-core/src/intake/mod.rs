//! Intake of user-entered plant data.
//!
//! Pipeline: raw form fields → normalization → submittability check → PlantObservation

mod normalizer;

pub use normalizer::*;

use crate::models::{LightEnvironment, MissingField, PlantKind, WateringFrequency};

/// Report which of the five observation fields are empty, in form order.
pub fn missing_fields(
    name: &str,
    kind: Option<PlantKind>,
    environment: Option<LightEnvironment>,
    watering_frequency: Option<WateringFrequency>,
    symptoms: &[String],
) -> Vec<MissingField> {
    let mut missing = Vec::new();

    if name.is_empty() {
        missing.push(MissingField::Name);
    }
    if kind.is_none() {
        missing.push(MissingField::Kind);
    }
    if environment.is_none() {
        missing.push(MissingField::Environment);
    }
    if watering_frequency.is_none() {
        missing.push(MissingField::WateringFrequency);
    }
    if symptoms.is_empty() {
        missing.push(MissingField::Symptoms);
    }

    missing
}

/// Whether an observation with these fields may be submitted.
pub fn is_submittable(
    name: &str,
    kind: Option<PlantKind>,
    environment: Option<LightEnvironment>,
    watering_frequency: Option<WateringFrequency>,
    symptoms: &[String],
) -> bool {
    missing_fields(name, kind, environment, watering_frequency, symptoms).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submittable_over_all_combinations() {
        let symptoms = vec!["Wilting".to_string()];

        // Bit i set means field i is filled in
        for mask in 0u8..32 {
            let filled = |bit: u8| mask & (1 << bit) != 0;

            let name = if filled(0) { "Fern by the door" } else { "" };
            let kind = filled(1).then_some(PlantKind::Fern);
            let environment = filled(2).then_some(LightEnvironment::Shade);
            let watering = filled(3).then_some(WateringFrequency::Weekly);
            let symptoms: &[String] = if filled(4) { &symptoms } else { &[] };

            let expected = mask == 0b1_1111;
            assert_eq!(
                is_submittable(name, kind, environment, watering, symptoms),
                expected,
                "mask {:05b}",
                mask
            );
            assert_eq!(
                missing_fields(name, kind, environment, watering, symptoms).len(),
                5 - mask.count_ones() as usize,
                "mask {:05b}",
                mask
            );
        }
    }

    #[test]
    fn test_whitespace_name_counts_as_filled() {
        let symptoms = normalize_symptoms("Wilting");
        assert!(is_submittable(
            "   ",
            Some(PlantKind::Fern),
            Some(LightEnvironment::Shade),
            Some(WateringFrequency::Weekly),
            &symptoms,
        ));

        let missing = missing_fields(
            "",
            Some(PlantKind::Herb),
            Some(LightEnvironment::FullSun),
            Some(WateringFrequency::Daily),
            &symptoms,
        );
        assert_eq!(missing, vec![MissingField::Name]);
    }

    #[test]
    fn test_delimiter_only_symptoms_are_missing() {
        let symptoms = normalize_symptoms(",\n,");
        assert!(!is_submittable(
            "Basil",
            Some(PlantKind::Herb),
            Some(LightEnvironment::FullSun),
            Some(WateringFrequency::Daily),
            &symptoms,
        ));
    }
}
