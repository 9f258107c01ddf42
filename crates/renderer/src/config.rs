//! Render configuration.

use std::path::PathBuf;

/// Bold sans-serif font shipped by the Debian/Ubuntu `fonts-dejavu-core` package.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Page the QR code points at.
pub const DEFAULT_QR_URL: &str = "https://bjazzaf.github.io/kuwait-forecast-png/";

/// Configuration for forecast card rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// TrueType font used for all text
    pub font_path: PathBuf,
    /// Em size in pixels
    pub font_size: f32,
    pub title: String,
    /// Line printed below the table
    pub note: String,
    /// Payload of the QR code
    pub qr_url: String,
    /// `Author` metadata tag
    pub author: String,
    /// `Software` metadata tag
    pub software: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: 18.0,
            title: "Marine & Weather Forecast".to_string(),
            note: "**Note:** Sea Current: Upwelling".to_string(),
            qr_url: DEFAULT_QR_URL.to_string(),
            author: "bjazzaf".to_string(),
            software: "forecast_generator.py".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }
}
