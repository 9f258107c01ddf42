//! Shared test utilities for the forecast-card workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Font discovery for rendering tests
//! - Skip macros for hosts without the bold DejaVu font
//! - Scratch output directories
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_font, scratch_dir};
//! ```

pub mod paths;

pub use paths::*;

/// Macro to skip a test if no usable bold sans-serif font is installed.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_font;
///
/// #[test]
/// fn test_render_table() {
///     let font_path = require_font!();
///     // Test code using font_path...
/// }
/// ```
///
/// If no font is found, the test prints a skip message and returns early.
#[macro_export]
macro_rules! require_font {
    () => {{
        match $crate::find_font() {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: DejaVuSans-Bold.ttf not found. Install fonts-dejavu-core or set FORECAST_FONT_PATH."
                );
                return;
            }
        }
    }};
}
