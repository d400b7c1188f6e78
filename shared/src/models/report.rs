//! Grading report models
//!
//! A report is everything the presentation layer needs to show a graded
//! sample: grade badges, one-line details, the metrics table and the
//! recommendation list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{GradingResult, Measurement};
use crate::standards::GradingStandards;

/// Outcome of comparing one reading with the grade A standard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Pass,
    /// Below grade A but not disqualifying on its own
    Acceptable,
    Fail,
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricStatus::Pass => write!(f, "✓ Pass"),
            MetricStatus::Acceptable => write!(f, "⚠ Acceptable"),
            MetricStatus::Fail => write!(f, "✗ Fail"),
        }
    }
}

/// One row of the metrics table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricRow {
    pub parameter: String,
    pub value: String,
    pub standard: String,
    pub status: MetricStatus,
}

impl MetricRow {
    fn new(parameter: &str, value: String, standard: String, status: MetricStatus) -> Self {
        Self {
            parameter: parameter.to_string(),
            value,
            standard,
            status,
        }
    }
}

/// Full report for one graded sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradingReport {
    pub measurement: Measurement,
    pub result: GradingResult,
    pub size_details: String,
    pub quality_details: String,
    pub class_details: String,
    pub metrics: Vec<MetricRow>,
}

/// Print a decimal without trailing zeros
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn pass_or(passed: bool, otherwise: MetricStatus) -> MetricStatus {
    if passed {
        MetricStatus::Pass
    } else {
        otherwise
    }
}

/// Compare each reading with the grade A tier of the standards
///
/// Dimensions and weight below grade A fail; color, uniformity and damage
/// outside grade A are only marked acceptable.
pub fn metrics_table(measurement: &Measurement, standards: &GradingStandards) -> Vec<MetricRow> {
    let size = &standards.size.grade_a;
    let quality = &standards.quality.grade_a;

    let color_standard = quality
        .accepted_colors
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(" / ");

    vec![
        MetricRow::new(
            "Seed Length",
            format!("{} mm", format_decimal(measurement.length)),
            format!(
                "{}-{}mm (A)",
                format_decimal(size.min_length),
                format_decimal(size.max_length)
            ),
            pass_or(measurement.length >= size.min_length, MetricStatus::Fail),
        ),
        MetricRow::new(
            "Seed Width",
            format!("{} mm", format_decimal(measurement.width)),
            format!(
                "{}-{}mm (A)",
                format_decimal(size.min_width),
                format_decimal(size.max_width)
            ),
            pass_or(measurement.width >= size.min_width, MetricStatus::Fail),
        ),
        MetricRow::new(
            "Weight Density",
            format!("{} g/100 seeds", format_decimal(measurement.weight)),
            format!(
                "{}-{}g (A)",
                format_decimal(quality.min_weight),
                format_decimal(quality.max_weight)
            ),
            pass_or(measurement.weight >= quality.min_weight, MetricStatus::Fail),
        ),
        MetricRow::new(
            "Color Grade",
            measurement.color.display_name().to_string(),
            color_standard,
            pass_or(
                quality.accepts_color(&measurement.color),
                MetricStatus::Acceptable,
            ),
        ),
        MetricRow::new(
            "Uniformity",
            format!("{}%", measurement.uniformity),
            format!("≥{}%", quality.min_uniformity),
            pass_or(
                measurement.uniformity >= quality.min_uniformity,
                MetricStatus::Acceptable,
            ),
        ),
        MetricRow::new(
            "Damage/Impurities",
            format!("{}%", measurement.damage),
            format!("≤{}%", quality.max_damage),
            pass_or(
                measurement.damage <= quality.max_damage,
                MetricStatus::Acceptable,
            ),
        ),
    ]
}

/// Grade a sample and assemble its report
pub fn build_report(measurement: &Measurement, standards: &GradingStandards) -> GradingReport {
    let result = standards.analyze(measurement);

    GradingReport {
        size_details: format!(
            "Length: {}mm, Width: {}mm",
            format_decimal(measurement.length),
            format_decimal(measurement.width)
        ),
        quality_details: format!(
            "Weight: {}g/100 seeds, Uniformity: {}%",
            format_decimal(measurement.weight),
            measurement.uniformity
        ),
        class_details: format!(
            "Suitable for {}",
            result.classification.recommended_use()
        ),
        metrics: metrics_table(measurement, standards),
        measurement: measurement.clone(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, Grade, SeedColor};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn low_sample() -> Measurement {
        Measurement {
            length: dec("6.0"),
            width: dec("4"),
            weight: dec("9.50"),
            color: SeedColor::Mixed,
            uniformity: 70,
            damage: 8,
        }
    }

    #[test]
    fn test_format_decimal_strips_trailing_zeros() {
        assert_eq!(format_decimal(dec("8.50")), "8.5");
        assert_eq!(format_decimal(dec("6.0")), "6");
        assert_eq!(format_decimal(dec("-1.25")), "-1.25");
    }

    #[test]
    fn test_metrics_for_low_sample() {
        let rows = metrics_table(&low_sample(), &GradingStandards::default());

        let statuses: Vec<MetricStatus> = rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                MetricStatus::Fail,
                MetricStatus::Fail,
                MetricStatus::Fail,
                MetricStatus::Acceptable,
                MetricStatus::Acceptable,
                MetricStatus::Acceptable,
            ]
        );
        assert_eq!(rows[0].value, "6 mm");
        assert_eq!(rows[2].value, "9.5 g/100 seeds");
        assert_eq!(rows[3].value, "Mixed Colors");
        assert_eq!(rows[5].value, "8%");
    }

    #[test]
    fn test_metric_labels_follow_standards() {
        let mut standards = GradingStandards::default();
        standards.size.grade_a.min_length = dec("8.5");
        standards.quality.grade_a.min_uniformity = 90;

        let rows = metrics_table(&low_sample(), &standards);
        assert_eq!(rows[0].standard, "8.5-10mm (A)");
        assert_eq!(rows[4].standard, "≥90%");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(MetricStatus::Pass.to_string(), "✓ Pass");
        assert_eq!(MetricStatus::Acceptable.to_string(), "⚠ Acceptable");
        assert_eq!(MetricStatus::Fail.to_string(), "✗ Fail");
    }

    #[test]
    fn test_report_details() {
        let report = build_report(&low_sample(), &GradingStandards::default());

        assert_eq!(report.result.size_grade, Grade::C);
        assert_eq!(report.result.classification, Classification::Regular);
        assert_eq!(report.size_details, "Length: 6mm, Width: 4mm");
        assert_eq!(report.quality_details, "Weight: 9.5g/100 seeds, Uniformity: 70%");
        assert_eq!(report.class_details, "Suitable for local markets and industrial use");
        assert_eq!(report.metrics.len(), 6);
    }
}
