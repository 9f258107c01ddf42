//! TrueType font loading and text drawing onto RGB canvases.

use std::path::{Path, PathBuf};

use forecast_common::{ForecastError, ForecastResult, Rgb};
use image::RgbImage;
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};

/// A font loaded from disk at a fixed pixel size.
pub struct FontFace {
    font: Font<'static>,
    scale: Scale,
    path: PathBuf,
}

impl FontFace {
    /// Load a TrueType font from `path`.
    ///
    /// `size` is the em size in pixels. rusttype scales by line height
    /// (ascent to descent), so the em size is converted using the font's
    /// own vertical metrics.
    pub fn load(path: impl AsRef<Path>, size: f32) -> ForecastResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ForecastError::FontNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| ForecastError::FontInvalid(path.to_path_buf()))?;

        let scale = Scale::uniform(em_to_line_height(&font, size));
        tracing::debug!(path = %path.display(), size, line_height = scale.y, "Loaded font");

        Ok(Self {
            font,
            scale,
            path: path.to_path_buf(),
        })
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, img: &mut RgbImage, text: &str, (x, y): (i32, i32), color: Rgb) {
        draw_text_mut(
            img,
            image::Rgb(color.to_array()),
            x,
            y,
            self.scale,
            &self.font,
            text,
        );
    }

    /// Vertical scale passed to rusttype, in pixels.
    pub fn line_height(&self) -> f32 {
        self.scale.y
    }

    /// Horizontal advance of `text` in pixels.
    pub fn text_width(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}

/// Line height that yields an em of `em_px` pixels.
fn em_to_line_height(font: &Font<'_>, em_px: f32) -> f32 {
    let v = font.v_metrics_unscaled();
    em_px * (v.ascent - v.descent) / f32::from(font.units_per_em())
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("path", &self.path)
            .field("scale", &self.scale)
            .finish()
    }
}
