//! Command-line argument parsing for the seed grader

use std::path::PathBuf;

use clap::Parser;
use shared::ManualEntry;

use crate::config::OutputFormat;

/// Grade a seed sample from manual measurements or the simulated image reading
#[derive(Parser, Debug)]
#[command(name = "seed-grader")]
#[command(version)]
#[command(about = "Grade agricultural seed samples by size and quality", long_about = None)]
pub struct Args {
    /// Seed length in millimetres
    #[arg(long)]
    pub length: Option<String>,

    /// Seed width in millimetres
    #[arg(long)]
    pub width: Option<String>,

    /// Weight in grams per 100 seeds
    #[arg(long)]
    pub weight: Option<String>,

    /// Seed color: dark-brown, medium-brown, light-brown or mixed
    #[arg(long)]
    pub color: Option<String>,

    /// Uniformity percentage
    #[arg(long)]
    pub uniformity: Option<String>,

    /// Damage/impurities percentage
    #[arg(long)]
    pub damage: Option<String>,

    /// Grade the simulated image reading instead of manual entry
    #[arg(
        long,
        conflicts_with_all = ["length", "width", "weight", "color", "uniformity", "damage"]
    )]
    pub image: bool,

    /// Output format (overrides the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Additional configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Manual entry fields exactly as typed
    pub fn manual_entry(&self) -> ManualEntry {
        ManualEntry {
            length: self.length.clone(),
            width: self.width.clone(),
            weight: self.weight.clone(),
            color: self.color.clone(),
            uniformity: self.uniformity.clone(),
            damage: self.damage.clone(),
        }
    }
}
