//! Validation utilities for seed grading
//!
//! Covers the manual entry form and configured grading standards. The
//! grading engine itself never rejects a measurement.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Measurement, SeedColor};
use crate::standards::GradingStandards;

// ============================================================================
// Manual Entry
// ============================================================================

/// Raw text of the manual entry form, one entry per field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualEntry {
    pub length: Option<String>,
    pub width: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
    pub uniformity: Option<String>,
    pub damage: Option<String>,
}

/// Manual entry form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Length,
    Width,
    Weight,
    Color,
    Uniformity,
    Damage,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Length => "length",
            FormField::Width => "width",
            FormField::Weight => "weight",
            FormField::Color => "color",
            FormField::Uniformity => "uniformity",
            FormField::Damage => "damage",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A required form field was empty or unreadable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all required fields")]
pub struct MissingInputError {
    /// First missing field in form order
    pub field: FormField,
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Most digits a `Decimal` mantissa holds
const MAX_DIGITS: usize = 28;

/// Plain decimal numerals only: optional sign, digits, at most one point.
///
/// Fraction digits past the decimal precision are dropped. Whole parts too
/// large for a `Decimal` saturate at `Decimal::MAX`/`MIN` by sign.
fn parse_numeral(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    let saturated = if negative { Decimal::MIN } else { Decimal::MAX };
    let whole = whole.trim_start_matches('0');
    if whole.len() > MAX_DIGITS + 1 {
        return Some(saturated);
    }
    let fraction = &fraction[..fraction.len().min(MAX_DIGITS.saturating_sub(whole.len()))];

    let mut numeral = String::with_capacity(whole.len() + fraction.len() + 3);
    if negative {
        numeral.push('-');
    }
    numeral.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        numeral.push('.');
        numeral.push_str(fraction);
    }

    match Decimal::from_str(&numeral) {
        Ok(value) => Some(value),
        Err(_) if whole.len() >= MAX_DIGITS => Some(saturated),
        Err(_) => None,
    }
}

/// Zero counts as empty, as it does on the form
fn required_decimal(raw: &Option<String>, field: FormField) -> Result<Decimal, MissingInputError> {
    present(raw)
        .and_then(parse_numeral)
        .filter(|value| !value.is_zero())
        .ok_or(MissingInputError { field })
}

fn required_percent(raw: &Option<String>, field: FormField) -> Result<i32, MissingInputError> {
    present(raw)
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or(MissingInputError { field })
}

/// Turn manual entry text into a measurement
///
/// Only presence is checked. Out-of-range numbers and unknown colors are
/// passed on to the grader.
pub fn parse_manual_entry(entry: &ManualEntry) -> Result<Measurement, MissingInputError> {
    let length = required_decimal(&entry.length, FormField::Length)?;
    let width = required_decimal(&entry.width, FormField::Width)?;
    let weight = required_decimal(&entry.weight, FormField::Weight)?;
    let color = present(&entry.color)
        .map(SeedColor::from)
        .ok_or(MissingInputError {
            field: FormField::Color,
        })?;
    let uniformity = required_percent(&entry.uniformity, FormField::Uniformity)?;
    let damage = required_percent(&entry.damage, FormField::Damage)?;

    Ok(Measurement {
        length,
        width,
        weight,
        color,
        uniformity,
        damage,
    })
}

// ============================================================================
// Grading Standards
// ============================================================================

fn is_percentage(value: i32) -> bool {
    (0..=100).contains(&value)
}

/// Validate that configured tiers are ordered and within range
pub fn validate_standards(standards: &GradingStandards) -> Result<(), &'static str> {
    let size_a = &standards.size.grade_a;
    let size_b = &standards.size.grade_b;
    for tier in [size_a, size_b] {
        if tier.max_length < tier.min_length || tier.max_width < tier.min_width {
            return Err("Size tier maximums must not be below their minimums");
        }
    }
    if size_a.min_length < size_b.min_length || size_a.min_width < size_b.min_width {
        return Err("Grade A size minimums must not be below grade B");
    }

    let quality_a = &standards.quality.grade_a;
    let quality_b = &standards.quality.grade_b;
    for tier in [quality_a, quality_b] {
        if tier.max_weight < tier.min_weight {
            return Err("Quality tier maximum weight must not be below its minimum");
        }
        if !is_percentage(tier.min_uniformity) || !is_percentage(tier.max_damage) {
            return Err("Quality tier percentages must be between 0 and 100");
        }
        if tier.accepted_colors.is_empty() {
            return Err("Quality tier must accept at least one color");
        }
    }
    if quality_a.min_weight < quality_b.min_weight
        || quality_a.min_uniformity < quality_b.min_uniformity
        || quality_a.max_damage > quality_b.max_damage
    {
        return Err("Grade A quality limits must not be looser than grade B");
    }

    let advisories = &standards.advisories;
    if !is_percentage(advisories.damage_above) || !is_percentage(advisories.uniformity_below) {
        return Err("Advisory thresholds must be between 0 and 100");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fields: [&str; 6]) -> ManualEntry {
        let value = |s: &str| Some(s.to_string());
        ManualEntry {
            length: value(fields[0]),
            width: value(fields[1]),
            weight: value(fields[2]),
            color: value(fields[3]),
            uniformity: value(fields[4]),
            damage: value(fields[5]),
        }
    }

    // ========================================================================
    // Manual Entry Tests
    // ========================================================================

    #[test]
    fn test_parse_manual_entry_valid() {
        let measurement =
            parse_manual_entry(&entry(["8.5", " 5.2 ", "15.3", "dark-brown", "92", "2"])).unwrap();
        assert_eq!(measurement.length, Decimal::new(85, 1));
        assert_eq!(measurement.width, Decimal::new(52, 1));
        assert_eq!(measurement.color, SeedColor::DarkBrown);
        assert_eq!(measurement.uniformity, 92);
        assert_eq!(measurement.damage, 2);
    }

    #[test]
    fn test_parse_manual_entry_missing_weight() {
        let mut form = entry(["8.5", "5.2", "", "dark-brown", "92", "2"]);
        assert_eq!(
            parse_manual_entry(&form),
            Err(MissingInputError {
                field: FormField::Weight
            })
        );

        form.weight = None;
        let err = parse_manual_entry(&form).unwrap_err();
        assert_eq!(err.field, FormField::Weight);
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_parse_manual_entry_unparseable_number() {
        let err = parse_manual_entry(&entry(["abc", "5.2", "15", "mixed", "92", "2"])).unwrap_err();
        assert_eq!(err.field, FormField::Length);
    }

    #[test]
    fn test_parse_manual_entry_zero_is_missing() {
        let err = parse_manual_entry(&entry(["8", "0", "15", "mixed", "92", "2"])).unwrap_err();
        assert_eq!(err.field, FormField::Width);
    }

    #[test]
    fn test_parse_manual_entry_reports_first_missing_field() {
        let err = parse_manual_entry(&ManualEntry::default()).unwrap_err();
        assert_eq!(err.field, FormField::Length);
    }

    #[test]
    fn test_parse_manual_entry_blank_color() {
        let err = parse_manual_entry(&entry(["8", "5", "15", "  ", "92", "2"])).unwrap_err();
        assert_eq!(err.field, FormField::Color);
    }

    #[test]
    fn test_parse_manual_entry_slider_values() {
        let err = parse_manual_entry(&entry(["8", "5", "15", "mixed", "9.5", "2"])).unwrap_err();
        assert_eq!(err.field, FormField::Uniformity);

        let err = parse_manual_entry(&entry(["8", "5", "15", "mixed", "95", ""])).unwrap_err();
        assert_eq!(err.field, FormField::Damage);

        let measurement = parse_manual_entry(&entry(["8", "5", "15", "mixed", "0", "0"])).unwrap();
        assert_eq!(measurement.uniformity, 0);
        assert_eq!(measurement.damage, 0);
    }

    #[test]
    fn test_parse_manual_entry_keeps_odd_values() {
        let measurement =
            parse_manual_entry(&entry(["-3", "5", "15", "purple", "150", "-2"])).unwrap();
        assert_eq!(measurement.length, Decimal::from(-3));
        assert_eq!(measurement.color, SeedColor::Unrecognized("purple".to_string()));
        assert_eq!(measurement.uniformity, 150);
    }

    #[test]
    fn test_parse_numeral_rejects_separators_and_exponents() {
        for text in ["1_000", "8_5", "1e3", "8.5.1", ".", "-", "+", "8,5", " 8"] {
            assert_eq!(parse_numeral(text), None, "{:?} should not parse", text);
        }

        let err = parse_manual_entry(&entry(["1_000", "5", "15", "mixed", "92", "2"])).unwrap_err();
        assert_eq!(err.field, FormField::Length);
    }

    #[test]
    fn test_parse_numeral_plain_forms() {
        assert_eq!(parse_numeral("+8.5"), Some(Decimal::new(85, 1)));
        assert_eq!(parse_numeral("8."), Some(Decimal::from(8)));
        assert_eq!(parse_numeral(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_numeral("-007.25"), Some(Decimal::new(-725, 2)));
    }

    #[test]
    fn test_parse_numeral_long_input_is_not_missing() {
        let huge = "9".repeat(40);
        let measurement =
            parse_manual_entry(&entry([&huge, "5", "15", "mixed", "92", "2"])).unwrap();
        assert_eq!(measurement.length, Decimal::MAX);

        let negative = format!("-{}", huge);
        assert_eq!(parse_numeral(&negative), Some(Decimal::MIN));

        // 29 significant digits, more than the mantissa holds
        let precise = parse_numeral("8.0000000000000000000000000001").unwrap();
        assert_eq!(precise, Decimal::from(8));

        let long_fraction = format!("15.{}", "3".repeat(40));
        let measurement =
            parse_manual_entry(&entry(["8", "5", &long_fraction, "mixed", "92", "2"])).unwrap();
        assert!(measurement.weight > Decimal::new(153, 1));
        assert!(measurement.weight < Decimal::new(154, 1));
    }

    // ========================================================================
    // Standards Validation Tests
    // ========================================================================

    #[test]
    fn test_default_standards_are_valid() {
        assert!(validate_standards(&GradingStandards::default()).is_ok());
    }

    #[test]
    fn test_inverted_size_tiers_rejected() {
        let mut standards = GradingStandards::default();
        standards.size.grade_a.min_length = Decimal::from(6);
        assert!(validate_standards(&standards).is_err());
    }

    #[test]
    fn test_size_max_below_min_rejected() {
        let mut standards = GradingStandards::default();
        standards.size.grade_b.max_width = Decimal::from(4);
        assert!(validate_standards(&standards).is_err());
    }

    #[test]
    fn test_loose_quality_a_rejected() {
        let mut standards = GradingStandards::default();
        standards.quality.grade_a.max_damage = 5;
        assert!(validate_standards(&standards).is_err());
    }

    #[test]
    fn test_empty_colors_rejected() {
        let mut standards = GradingStandards::default();
        standards.quality.grade_b.accepted_colors.clear();
        assert!(validate_standards(&standards).is_err());
    }

    proptest::proptest! {
        /// Arbitrary form text either parses or names a field, never panics
        #[test]
        fn prop_parse_manual_entry_total(
            length in ".{0,6}",
            weight in "-?[0-9]{0,3}(\\.[0-9]{0,2})?",
            color in "[a-z-]{0,12}",
            uniformity in ".{0,4}",
        ) {
            let form = ManualEntry {
                length: Some(length),
                width: Some("5".to_string()),
                weight: Some(weight),
                color: Some(color),
                uniformity: Some(uniformity),
                damage: Some("1".to_string()),
            };
            match parse_manual_entry(&form) {
                Ok(measurement) => proptest::prop_assert!(!measurement.weight.is_zero()),
                Err(err) => proptest::prop_assert!(matches!(
                    err.field,
                    FormField::Length | FormField::Weight | FormField::Color | FormField::Uniformity
                )),
            }
        }
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let mut standards = GradingStandards::default();
        standards.advisories.uniformity_below = 120;
        assert!(validate_standards(&standards).is_err());
    }
}
