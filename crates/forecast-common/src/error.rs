//! Error types for forecast rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Primary error type for forecast generation.
#[derive(Debug, Error)]
pub enum ForecastError {
    // === Font Errors ===
    #[error("Font file not found at {path}: {source}")]
    FontNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font file is not a valid TrueType font: {0}")]
    FontInvalid(PathBuf),

    // === Rendering Errors ===
    #[error("QR encoding failed: {0}")]
    QrEncoding(String),

    #[error("PNG encoding failed: {0}")]
    PngEncoding(String),

    // === Output Errors ===
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ForecastError {
    /// Whether the error happened before any drawing took place.
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            ForecastError::FontNotFound { .. } | ForecastError::FontInvalid(_)
        )
    }
}
