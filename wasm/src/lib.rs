//! WebAssembly module for the seed grading form
//!
//! Provides client-side grading for:
//! - Manual entry analysis
//! - Simulated image analysis
//! - Individual size, quality and overall classification
//! - Display helpers for colors and classifications

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::standards::*;
pub use shared::validation::*;

use shared::simulation::analyze_simulated_image;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("Seed grading module loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Form errors carry the offending field so the page can focus it
fn js_error(message: &str, field: Option<&str>) -> JsValue {
    let error = js_sys::Error::new(message);
    if let Some(field) = field {
        // Reflect::set only fails on frozen objects
        let _ = js_sys::Reflect::set(&error, &"field".into(), &field.into());
    }
    error.into()
}

/// Form inputs arrive as f64. Magnitudes past the decimal range, infinities
/// included, saturate at `Decimal::MAX`/`MIN` so they keep their side of
/// every threshold. NaN grades as zero.
fn to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::try_from(value).unwrap_or_else(|_| {
        if value >= 1.0 {
            Decimal::MAX
        } else if value <= -1.0 {
            Decimal::MIN
        } else {
            Decimal::ZERO
        }
    })
}

enum FormError {
    InvalidJson(String),
    MissingInput(MissingInputError),
    InvalidStandards(&'static str),
}

impl FormError {
    fn into_js(self) -> JsValue {
        match self {
            FormError::InvalidJson(message) => js_error(&message, None),
            FormError::MissingInput(err) => js_error(&err.to_string(), Some(err.field.name())),
            FormError::InvalidStandards(message) => js_error(message, None),
        }
    }
}

fn report_json(report: &GradingReport) -> Result<String, FormError> {
    serde_json::to_string(report)
        .map_err(|e| FormError::InvalidJson(format!("Failed to encode report: {}", e)))
}

fn grade_form(form_json: &str, standards: &GradingStandards) -> Result<String, FormError> {
    let entry: ManualEntry = serde_json::from_str(form_json)
        .map_err(|e| FormError::InvalidJson(format!("Invalid form JSON: {}", e)))?;
    let measurement = parse_manual_entry(&entry).map_err(FormError::MissingInput)?;

    let report = build_report(&measurement, standards);
    log(&format!(
        "Graded manual entry: size {}, quality {}, {}",
        report.result.size_grade, report.result.quality_grade, report.result.classification
    ));
    report_json(&report)
}

fn parse_standards(standards_json: &str) -> Result<GradingStandards, FormError> {
    let standards: GradingStandards = serde_json::from_str(standards_json)
        .map_err(|e| FormError::InvalidJson(format!("Invalid standards JSON: {}", e)))?;
    validate_standards(&standards).map_err(FormError::InvalidStandards)?;
    Ok(standards)
}

/// Grade the manual entry form and return the report as JSON
///
/// `form_json` holds the raw text of each field, e.g.
/// `{"length": "8.5", "width": "5.2", "weight": "15.3", "color": "dark-brown",
/// "uniformity": "92", "damage": "2"}`. A missing field throws an `Error`
/// with a `field` property.
#[wasm_bindgen]
pub fn analyze_manual_entry(form_json: &str) -> Result<String, JsValue> {
    grade_form(form_json, default_standards()).map_err(FormError::into_js)
}

/// Same as `analyze_manual_entry` with custom grading standards
#[wasm_bindgen]
pub fn analyze_manual_entry_with_standards(
    form_json: &str,
    standards_json: &str,
) -> Result<String, JsValue> {
    parse_standards(standards_json)
        .and_then(|standards| grade_form(form_json, &standards))
        .map_err(FormError::into_js)
}

/// Grade the simulated image reading and return the report as JSON
#[wasm_bindgen]
pub fn analyze_image() -> Result<String, JsValue> {
    let report = analyze_simulated_image(default_standards());
    log(&format!(
        "Graded simulated image: {}",
        report.result.classification
    ));
    report_json(&report).map_err(FormError::into_js)
}

/// Size grade letter for seed dimensions in millimetres
#[wasm_bindgen]
pub fn classify_seed_size(length: f64, width: f64) -> String {
    classify_size(to_decimal(length), to_decimal(width)).to_string()
}

/// Quality grade letter
#[wasm_bindgen]
pub fn classify_seed_quality(weight: f64, color: &str, uniformity: i32, damage: i32) -> String {
    classify_quality(to_decimal(weight), &SeedColor::from(color), uniformity, damage).to_string()
}

fn overall_from_letters(size: &str, quality: &str) -> Result<Classification, &'static str> {
    Ok(classify_overall(size.parse()?, quality.parse()?))
}

/// Overall classification from two grade letters
#[wasm_bindgen]
pub fn classify_seed_overall(size_grade: &str, quality_grade: &str) -> Result<String, JsValue> {
    overall_from_letters(size_grade, quality_grade)
        .map(|classification| classification.to_string())
        .map_err(|message| js_error(message, None))
}

/// Display name for a color form value
#[wasm_bindgen]
pub fn format_seed_color(color: &str) -> String {
    SeedColor::from(color).display_name().to_string()
}

/// Intended use for a classification name
#[wasm_bindgen]
pub fn recommended_use_for(classification: &str) -> String {
    classification
        .parse::<Classification>()
        .map(Classification::recommended_use)
        .unwrap_or("general use")
        .to_string()
}
