//! Seed sample measurement models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single seed sample as measured by the grader
///
/// Values are taken as given. Physically impossible readings (negative
/// lengths, percentages above 100) are still graded, usually into the
/// lowest tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Average seed length in millimetres
    pub length: Decimal,
    /// Average seed width in millimetres
    pub width: Decimal,
    /// Weight in grams per 100 seeds
    pub weight: Decimal,
    pub color: SeedColor,
    /// Percentage of seeds matching the expected appearance and size
    pub uniformity: i32,
    /// Percentage of seeds with visible defects or foreign impurities
    pub damage: i32,
}

/// Seed coat color
///
/// Parse with `SeedColor::from`. Colors compare and hash by form value, so an
/// `Unrecognized` built by hand around a known form value such as
/// `dark-brown` grades, displays and compares as that known color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeedColor {
    DarkBrown,
    MediumBrown,
    LightBrown,
    Mixed,
    /// Any color text outside the known set, kept verbatim
    Unrecognized(String),
}

fn known_display_name(form_value: &str) -> Option<&'static str> {
    match form_value {
        "dark-brown" => Some("Dark Brown"),
        "medium-brown" => Some("Medium Brown"),
        "light-brown" => Some("Light Brown"),
        "mixed" => Some("Mixed Colors"),
        _ => None,
    }
}

impl SeedColor {
    /// Form value of the color, e.g. `dark-brown`
    pub fn as_str(&self) -> &str {
        match self {
            SeedColor::DarkBrown => "dark-brown",
            SeedColor::MediumBrown => "medium-brown",
            SeedColor::LightBrown => "light-brown",
            SeedColor::Mixed => "mixed",
            SeedColor::Unrecognized(raw) => raw,
        }
    }

    /// Human readable name shown in reports
    pub fn display_name(&self) -> &str {
        known_display_name(self.as_str()).unwrap_or(self.as_str())
    }

    pub fn is_recognized(&self) -> bool {
        known_display_name(self.as_str()).is_some()
    }
}

impl PartialEq for SeedColor {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SeedColor {}

impl std::hash::Hash for SeedColor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for SeedColor {
    /// Exact, case-sensitive match against the form values
    fn from(value: &str) -> Self {
        match value {
            "dark-brown" => SeedColor::DarkBrown,
            "medium-brown" => SeedColor::MediumBrown,
            "light-brown" => SeedColor::LightBrown,
            "mixed" => SeedColor::Mixed,
            other => SeedColor::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SeedColor {
    fn from(value: String) -> Self {
        SeedColor::from(value.as_str())
    }
}

impl From<SeedColor> for String {
    fn from(color: SeedColor) -> Self {
        match color {
            SeedColor::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SeedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
