//! Seed grading standards
//!
//! Every threshold the grader consults lives here. The same values drive
//! the grade decisions and the labels printed in the metrics table, so a
//! reconfigured standard can never disagree with its own report.
//!
//! Grade C is the fallback tier: a sample that fails the grade B tier is
//! grade C, whatever its readings.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    advisory_recommendations, base_recommendations, classify_overall, Grade,
    GradingResult, Measurement, SeedColor,
};

/// Complete set of grading thresholds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GradingStandards {
    pub size: SizeStandards,
    pub quality: QualityStandards,
    pub advisories: AdvisoryThresholds,
}

/// Size tiers (seed dimensions in millimetres)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SizeStandards {
    pub grade_a: SizeTier,
    pub grade_b: SizeTier,
}

/// One size tier
///
/// Only the minimums take part in grading. The maximums describe the
/// expected range and are shown next to the minimums in reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeTier {
    pub min_length: Decimal,
    pub max_length: Decimal,
    pub min_width: Decimal,
    pub max_width: Decimal,
}

impl SizeTier {
    /// Both axes must reach their minimum (inclusive)
    pub fn admits(&self, length: Decimal, width: Decimal) -> bool {
        length >= self.min_length && width >= self.min_width
    }
}

/// Quality tiers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualityStandards {
    pub grade_a: QualityTier,
    pub grade_b: QualityTier,
}

/// One quality tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityTier {
    /// Grams per 100 seeds
    pub min_weight: Decimal,
    /// Descriptive upper bound, report only
    pub max_weight: Decimal,
    pub accepted_colors: Vec<SeedColor>,
    pub min_uniformity: i32,
    pub max_damage: i32,
}

impl QualityTier {
    /// All four predicates must hold
    pub fn admits(&self, weight: Decimal, color: &SeedColor, uniformity: i32, damage: i32) -> bool {
        weight >= self.min_weight
            && uniformity >= self.min_uniformity
            && damage <= self.max_damage
            && self.accepts_color(color)
    }

    pub fn accepts_color(&self, color: &SeedColor) -> bool {
        self.accepted_colors.contains(color)
    }
}

/// Limits that trigger the conditional recommendation notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// Cleaning note when damage is strictly above this percentage
    pub damage_above: i32,
    /// Sorting note when uniformity is strictly below this percentage
    pub uniformity_below: i32,
}

impl Default for SizeStandards {
    fn default() -> Self {
        Self {
            grade_a: SizeTier {
                min_length: Decimal::from(8),
                max_length: Decimal::from(10),
                min_width: Decimal::from(5),
                max_width: Decimal::new(65, 1),
            },
            grade_b: SizeTier {
                min_length: Decimal::from(7),
                max_length: Decimal::from(9),
                min_width: Decimal::new(45, 1),
                max_width: Decimal::new(55, 1),
            },
        }
    }
}

impl Default for QualityStandards {
    fn default() -> Self {
        Self {
            grade_a: QualityTier {
                min_weight: Decimal::from(14),
                max_weight: Decimal::from(16),
                accepted_colors: vec![SeedColor::DarkBrown],
                min_uniformity: 95,
                max_damage: 1,
            },
            grade_b: QualityTier {
                min_weight: Decimal::from(12),
                max_weight: Decimal::from(14),
                accepted_colors: vec![SeedColor::MediumBrown, SeedColor::DarkBrown],
                min_uniformity: 85,
                max_damage: 3,
            },
        }
    }
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            damage_above: 3,
            uniformity_below: 85,
        }
    }
}

/// Standards shared by the free grading functions
pub fn default_standards() -> &'static GradingStandards {
    static DEFAULT: OnceLock<GradingStandards> = OnceLock::new();
    DEFAULT.get_or_init(GradingStandards::default)
}

impl GradingStandards {
    /// Size grade from seed dimensions, first matching tier wins
    pub fn classify_size(&self, length: Decimal, width: Decimal) -> Grade {
        if self.size.grade_a.admits(length, width) {
            Grade::A
        } else if self.size.grade_b.admits(length, width) {
            Grade::B
        } else {
            Grade::C
        }
    }

    /// Quality grade from weight, color, uniformity and damage
    pub fn classify_quality(
        &self,
        weight: Decimal,
        color: &SeedColor,
        uniformity: i32,
        damage: i32,
    ) -> Grade {
        if self.quality.grade_a.admits(weight, color, uniformity, damage) {
            Grade::A
        } else if self.quality.grade_b.admits(weight, color, uniformity, damage) {
            Grade::B
        } else {
            Grade::C
        }
    }

    /// Base recommendations for the grade pair followed by any advisories
    pub fn recommend(&self, measurement: &Measurement, size: Grade, quality: Grade) -> Vec<String> {
        let advisories = advisory_recommendations(measurement, &self.advisories);

        base_recommendations(size, quality)
            .iter()
            .chain(advisories.iter())
            .map(|s| s.to_string())
            .collect()
    }

    /// Run the whole grading pipeline for one sample
    pub fn analyze(&self, measurement: &Measurement) -> GradingResult {
        let size_grade = self.classify_size(measurement.length, measurement.width);
        let quality_grade = self.classify_quality(
            measurement.weight,
            &measurement.color,
            measurement.uniformity,
            measurement.damage,
        );

        GradingResult {
            size_grade,
            quality_grade,
            classification: classify_overall(size_grade, quality_grade),
            recommendations: self.recommend(measurement, size_grade, quality_grade),
        }
    }
}
