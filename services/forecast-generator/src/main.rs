//! Marine forecast card generator.
//!
//! Renders the fixed four-island marine forecast as two PNG cards
//! (`forecast_today.png`, `forecast_tomorrow.png`) with a QR code,
//! watermark and embedded metadata.

mod config;
mod generate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use forecast_common::MARINE_FORECASTS;
use renderer::config::DEFAULT_FONT_PATH;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(name = "forecast-generator")]
#[command(about = "Render marine forecast cards as PNG")]
struct Args {
    /// Bold sans-serif TrueType font used for all text
    #[arg(long, env = "FORECAST_FONT_PATH", default_value = DEFAULT_FONT_PATH)]
    font_path: PathBuf,

    /// Directory the cards are written to
    #[arg(long, env = "FORECAST_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = GeneratorConfig::new(args.font_path, args.output_dir);
    info!(
        font = %config.render.font_path.display(),
        output_dir = %config.output_dir.display(),
        "Starting forecast generator"
    );

    generate::generate_all(&config, &MARINE_FORECASTS)?;

    Ok(())
}
