//! Plant attribute enumerations offered by the intake form.
//!
//! Each value has a stable wire string (sent to the diagnosis service
//! verbatim) and a display label for selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A wire string that names no known value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {field} value: {value:?}")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

/// Broad plant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum PlantKind {
    Succulent,
    Tropical,
    Fern,
    Flowering,
    Herb,
    Vegetable,
    Tree,
    Other,
}

impl PlantKind {
    pub const ALL: [PlantKind; 8] = [
        PlantKind::Succulent,
        PlantKind::Tropical,
        PlantKind::Fern,
        PlantKind::Flowering,
        PlantKind::Herb,
        PlantKind::Vegetable,
        PlantKind::Tree,
        PlantKind::Other,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            PlantKind::Succulent => "succulent",
            PlantKind::Tropical => "tropical",
            PlantKind::Fern => "fern",
            PlantKind::Flowering => "flowering",
            PlantKind::Herb => "herb",
            PlantKind::Vegetable => "vegetable",
            PlantKind::Tree => "tree",
            PlantKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlantKind::Succulent => "Succulent",
            PlantKind::Tropical => "Tropical",
            PlantKind::Fern => "Fern",
            PlantKind::Flowering => "Flowering Plant",
            PlantKind::Herb => "Herb",
            PlantKind::Vegetable => "Vegetable",
            PlantKind::Tree => "Tree/Shrub",
            PlantKind::Other => "Other",
        }
    }
}

/// Light the plant receives where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum LightEnvironment {
    FullSun,
    PartialSun,
    BrightIndirect,
    LowLight,
    Shade,
}

impl LightEnvironment {
    pub const ALL: [LightEnvironment; 5] = [
        LightEnvironment::FullSun,
        LightEnvironment::PartialSun,
        LightEnvironment::BrightIndirect,
        LightEnvironment::LowLight,
        LightEnvironment::Shade,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            LightEnvironment::FullSun => "full-sun",
            LightEnvironment::PartialSun => "partial-sun",
            LightEnvironment::BrightIndirect => "bright-indirect",
            LightEnvironment::LowLight => "low-light",
            LightEnvironment::Shade => "shade",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LightEnvironment::FullSun => "Full Sun (6+ hours direct)",
            LightEnvironment::PartialSun => "Partial Sun (3-6 hours)",
            LightEnvironment::BrightIndirect => "Bright Indirect Light",
            LightEnvironment::LowLight => "Low Light",
            LightEnvironment::Shade => "Shade",
        }
    }
}

/// How often the plant is watered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "kebab-case")]
pub enum WateringFrequency {
    Daily,
    #[serde(rename = "every-2-3-days")]
    EveryFewDays,
    Weekly,
    BiWeekly,
    Monthly,
    WhenDry,
}

impl WateringFrequency {
    pub const ALL: [WateringFrequency; 6] = [
        WateringFrequency::Daily,
        WateringFrequency::EveryFewDays,
        WateringFrequency::Weekly,
        WateringFrequency::BiWeekly,
        WateringFrequency::Monthly,
        WateringFrequency::WhenDry,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            WateringFrequency::Daily => "daily",
            WateringFrequency::EveryFewDays => "every-2-3-days",
            WateringFrequency::Weekly => "weekly",
            WateringFrequency::BiWeekly => "bi-weekly",
            WateringFrequency::Monthly => "monthly",
            WateringFrequency::WhenDry => "when-dry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WateringFrequency::Daily => "Daily",
            WateringFrequency::EveryFewDays => "Every 2-3 days",
            WateringFrequency::Weekly => "Weekly",
            WateringFrequency::BiWeekly => "Every 2 weeks",
            WateringFrequency::Monthly => "Monthly",
            WateringFrequency::WhenDry => "When soil is dry",
        }
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl fmt::Display for LightEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl fmt::Display for WateringFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for PlantKind {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_wire() == s)
            .ok_or_else(|| UnknownValue {
                field: "plant kind",
                value: s.to_string(),
            })
    }
}

impl FromStr for LightEnvironment {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_wire() == s)
            .ok_or_else(|| UnknownValue {
                field: "light environment",
                value: s.to_string(),
            })
    }
}

impl FromStr for WateringFrequency {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_wire() == s)
            .ok_or_else(|| UnknownValue {
                field: "watering frequency",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() {
        for kind in PlantKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_wire()));
        }
        for env in LightEnvironment::ALL {
            let json = serde_json::to_string(&env).unwrap();
            assert_eq!(json, format!("\"{}\"", env.as_wire()));
        }
        for freq in WateringFrequency::ALL {
            let json = serde_json::to_string(&freq).unwrap();
            assert_eq!(json, format!("\"{}\"", freq.as_wire()));
        }
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("tree".parse::<PlantKind>().unwrap(), PlantKind::Tree);
        assert_eq!(
            "bright-indirect".parse::<LightEnvironment>().unwrap(),
            LightEnvironment::BrightIndirect
        );
        assert_eq!(
            "every-2-3-days".parse::<WateringFrequency>().unwrap(),
            WateringFrequency::EveryFewDays
        );
    }

    #[test]
    fn test_parse_is_exact() {
        // Labels and other casings are not wire values
        assert!("Tree/Shrub".parse::<PlantKind>().is_err());
        assert!("Full-Sun".parse::<LightEnvironment>().is_err());

        let err = "fortnightly".parse::<WateringFrequency>().unwrap_err();
        assert_eq!(err.to_string(), "unknown watering frequency value: \"fortnightly\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(PlantKind::Tree.label(), "Tree/Shrub");
        assert_eq!(LightEnvironment::FullSun.label(), "Full Sun (6+ hours direct)");
        assert_eq!(WateringFrequency::BiWeekly.label(), "Every 2 weeks");
        assert_eq!(WateringFrequency::WhenDry.label(), "When soil is dry");
    }
}
