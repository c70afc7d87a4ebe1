//! opsdash summary - headless rendition of the dashboard
//!
//! Generates the same synthetic snapshot as the window and prints per-metric
//! statistics to stdout instead of drawing them.
//!
//! # Usage
//! ```sh
//! cargo run --bin summary -- --format json --seed 42
//! ```
//!
//! # Environment Variables
//! - `DASHBOARD_SEED` - Seed used when `--seed` is not given (default: unseeded)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use opsdash::application::generator::MetricGenerator;
use opsdash::application::summary::SnapshotSummary;
use opsdash::config::DashboardConfig;
use opsdash::domain::timeline::Timeline;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// RNG seed; overrides DASHBOARD_SEED
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig::from_env().context("Failed to load dashboard config")?;
    let seed = cli.seed.or(config.seed);
    info!("Generating summary (seed: {:?})", seed);

    let timeline = Timeline::now().context("Failed to build timeline")?;
    let snapshot = MetricGenerator::with_seed(seed)
        .snapshot(timeline)
        .context("Failed to generate metrics")?;
    let summary = SnapshotSummary::from_snapshot(&snapshot);

    match cli.format {
        OutputFormat::Text => print!("{}", summary),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        ),
    }

    Ok(())
}
