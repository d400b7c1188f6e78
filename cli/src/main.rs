//! Seed Grader - command-line seed sample grading
//!
//! Grades a seed sample by size and quality from manually entered
//! measurements or the simulated image reading, then prints the report.

use clap::Parser;
use shared::{
    analyze_simulated_image, build_report, parse_manual_entry, GradingReport, GradingStandards,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod config;
mod error;
mod render;

use args::Args;
use error::AppResult;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.log_json);

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load(args.config.as_deref())?;

    tracing::info!(environment = %config.environment, "Loaded grading standards");

    let report = grade(&args, &config.standards)?;

    let format = args.format.unwrap_or(config.output.format);
    println!("{}", render::render(&report, format)?);

    Ok(())
}

/// Logs go to stderr so the report on stdout stays machine readable
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "seed_grader=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Grade either the simulated image reading or the manual entry flags
fn grade(args: &Args, standards: &GradingStandards) -> AppResult<GradingReport> {
    let report = if args.image {
        tracing::info!("Analyzing simulated image reading");
        analyze_simulated_image(standards)
    } else {
        let measurement = parse_manual_entry(&args.manual_entry()).map_err(|e| {
            tracing::warn!(field = %e.field, "Manual entry incomplete");
            e
        })?;
        tracing::debug!(?measurement, "Parsed manual entry");
        build_report(&measurement, standards)
    };

    tracing::info!(
        size_grade = %report.result.size_grade,
        quality_grade = %report.result.quality_grade,
        classification = %report.result.classification,
        "Sample graded"
    );

    Ok(report)
}
