//! Writes the forecast cards.

use std::path::PathBuf;

use anyhow::{Context, Result};
use forecast_common::{ForecastRecord, GenerationTime};
use renderer::draw_forecast;
use tracing::info;

use crate::config::GeneratorConfig;

/// Render one card per output path, in order, each stamped with its own
/// generation time. Stops at the first failure.
pub fn generate_all(config: &GeneratorConfig, records: &[ForecastRecord]) -> Result<Vec<PathBuf>> {
    let paths = config.output_paths();
    let mut written = Vec::with_capacity(paths.len());

    for path in paths {
        let generated_at = GenerationTime::now();
        let path = draw_forecast(records, &config.render, &path, generated_at)
            .with_context(|| format!("Failed to generate {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Saved {}", name);

        written.push(path);
    }

    info!(count = written.len(), "Forecast generation complete");
    Ok(written)
}
