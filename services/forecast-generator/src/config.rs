//! Generator configuration.
//!
//! Only the environment coupling is configurable (font location, output
//! directory). The dataset and card layout are fixed.

use std::path::PathBuf;

use renderer::config::DEFAULT_FONT_PATH;
use renderer::RenderConfig;

/// Files written on every run, in order.
pub const OUTPUT_FILES: [&str; 2] = ["forecast_today.png", "forecast_tomorrow.png"];

/// Resolved generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub render: RenderConfig,
}

impl GeneratorConfig {
    pub fn new(font_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            render: RenderConfig::default().with_font_path(font_path),
        }
    }

    /// Output paths for this run.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        OUTPUT_FILES
            .iter()
            .map(|name| self.output_dir.join(name))
            .collect()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_PATH, ".")
    }
}
