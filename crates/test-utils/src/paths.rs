//! Path utilities for locating fonts and scratch directories in tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Locations checked for the bold DejaVu font, in order, after the
/// `FORECAST_FONT_PATH` environment variable.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", // Debian/Ubuntu
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",          // Fedora
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",             // Arch
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
];

/// Searches for a bold sans-serif font usable by the renderer.
///
/// # Returns
///
/// `Some(PathBuf)` if a font file is found, `None` otherwise.
pub fn find_font() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Check environment variable first
    if let Ok(path) = std::env::var("FORECAST_FONT_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(FONT_CANDIDATES.iter().map(PathBuf::from));

    candidates.into_iter().find(|p| p.is_file())
}

/// Creates an empty temporary directory for rendered output.
///
/// The directory is removed when the returned guard is dropped.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create scratch dir")
}
