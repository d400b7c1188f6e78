//! Seed grade and classification models

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Measurement, SeedColor};
use crate::standards::{default_standards, AdvisoryThresholds};

/// Size or quality grade, A is best
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    /// Points used when combining size and quality grades
    pub fn score(self) -> u8 {
        match self {
            Grade::A => 3,
            Grade::B => 2,
            Grade::C => 1,
        }
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Grade::A),
            "B" | "b" => Ok(Grade::B),
            "C" | "c" => Ok(Grade::C),
            _ => Err("Grade must be one of A, B or C"),
        }
    }
}

/// Overall seed classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Combined score 5-6
    Premium,
    /// Combined score 4
    Standard,
    /// Combined score 2-3
    Regular,
}

impl Classification {
    /// Intended use printed alongside the classification
    pub fn recommended_use(self) -> &'static str {
        match self {
            Classification::Premium => "export and certified planting",
            Classification::Standard => "commercial farming and processing",
            Classification::Regular => "local markets and industrial use",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Premium => write!(f, "Premium"),
            Classification::Standard => write!(f, "Standard"),
            Classification::Regular => write!(f, "Regular"),
        }
    }
}

impl std::str::FromStr for Classification {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premium" => Ok(Classification::Premium),
            "standard" => Ok(Classification::Standard),
            "regular" => Ok(Classification::Regular),
            _ => Err("Unknown classification"),
        }
    }
}

/// Outcome of grading one sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradingResult {
    pub size_grade: Grade,
    pub quality_grade: Grade,
    pub classification: Classification,
    pub recommendations: Vec<String>,
}

const EXPORT_RECOMMENDATIONS: [&str; 3] = [
    "Export quality - suitable for international markets",
    "Certified planting material",
    "Premium pricing recommended",
];

const COMMERCIAL_RECOMMENDATIONS: [&str; 3] = [
    "Commercial farming suitable",
    "Good for oil extraction",
    "Standard market pricing",
];

const LOCAL_MARKET_RECOMMENDATIONS: [&str; 3] = [
    "Best for local markets",
    "Suitable for industrial processing",
    "Consider for value-added products",
];

pub const CLEANING_ADVISORY: &str = "Consider additional cleaning to reduce impurities";
pub const SORTING_ADVISORY: &str = "Improve sorting process for better uniformity";

/// Classify seed size with the default standards
pub fn classify_size(length: Decimal, width: Decimal) -> Grade {
    default_standards().classify_size(length, width)
}

/// Classify seed quality with the default standards
pub fn classify_quality(weight: Decimal, color: &SeedColor, uniformity: i32, damage: i32) -> Grade {
    default_standards().classify_quality(weight, color, uniformity, damage)
}

/// Combine size and quality grades into the overall classification
pub fn classify_overall(size: Grade, quality: Grade) -> Classification {
    match size.score() + quality.score() {
        5.. => Classification::Premium,
        4 => Classification::Standard,
        _ => Classification::Regular,
    }
}

/// Recommendations for a graded sample with the default standards
pub fn recommend(measurement: &Measurement, size: Grade, quality: Grade) -> Vec<String> {
    default_standards().recommend(measurement, size, quality)
}

/// Grade a sample with the default standards
pub fn analyze(measurement: &Measurement) -> GradingResult {
    default_standards().analyze(measurement)
}

/// Base recommendation set for an exact grade pair
///
/// Only (A, A) and (B, B) have their own sets. Every other pair, including
/// mixed pairs such as (A, C), shares the local market set.
pub fn base_recommendations(size: Grade, quality: Grade) -> &'static [&'static str] {
    match (size, quality) {
        (Grade::A, Grade::A) => &EXPORT_RECOMMENDATIONS,
        (Grade::B, Grade::B) => &COMMERCIAL_RECOMMENDATIONS,
        _ => &LOCAL_MARKET_RECOMMENDATIONS,
    }
}

/// Conditional notes, cleaning first then sorting
pub fn advisory_recommendations(
    measurement: &Measurement,
    thresholds: &AdvisoryThresholds,
) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if measurement.damage > thresholds.damage_above {
        notes.push(CLEANING_ADVISORY);
    }
    if measurement.uniformity < thresholds.uniformity_below {
        notes.push(SORTING_ADVISORY);
    }
    notes
}
