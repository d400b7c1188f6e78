//! Simulated image analysis
//!
//! Stand-in for reading a sample from a photo. It always yields the same
//! measurement and grades it like any manual entry.

use rust_decimal::Decimal;

use crate::models::{build_report, GradingReport, Measurement, SeedColor};
use crate::standards::GradingStandards;

/// Fixed reading returned in place of image analysis
pub fn simulated_image_measurement() -> Measurement {
    Measurement {
        length: Decimal::new(85, 1),
        width: Decimal::new(52, 1),
        weight: Decimal::new(153, 1),
        color: SeedColor::DarkBrown,
        uniformity: 92,
        damage: 2,
    }
}

/// Grade the simulated reading
pub fn analyze_simulated_image(standards: &GradingStandards) -> GradingReport {
    build_report(&simulated_image_measurement(), standards)
}
