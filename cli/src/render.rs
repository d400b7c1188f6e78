//! Terminal rendering of grading reports

use std::fmt::Write;

use shared::GradingReport;

use crate::config::OutputFormat;
use crate::error::AppResult;

/// Render a report in the requested format
pub fn render(report: &GradingReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &GradingReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Size Grade:      [{}]  {}", result.size_grade, report.size_details);
    let _ = writeln!(
        out,
        "Quality Grade:   [{}]  {}",
        result.quality_grade, report.quality_details
    );
    let _ = writeln!(
        out,
        "Classification:  {}  {}",
        result.classification, report.class_details
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20}{:<22}{:<16}{}",
        "Parameter", "Value", "Standard", "Status"
    );
    for row in &report.metrics {
        let _ = writeln!(
            out,
            "{:<20}{:<22}{:<16}{}",
            row.parameter, row.value, row.standard, row.status
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for recommendation in &result.recommendations {
        let _ = writeln!(out, "  - {}", recommendation);
    }

    out
}
