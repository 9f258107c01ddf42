//! Forecast card rendering.
//!
//! Draws the forecast table, heading, note, QR code and watermark onto a
//! fixed-size canvas, then encodes it as PNG with `tEXt` metadata.

use std::path::{Path, PathBuf};

use forecast_common::{
    condition, sea_state, Classification, ForecastError, ForecastRecord, ForecastResult,
    GenerationTime, Rgb,
};
use image::imageops;
use image::{DynamicImage, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use tracing::{debug, info, warn};

use crate::config::RenderConfig;
use crate::layout::{
    qr_origin, TableLayout, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_TEXT_INSET, HEADERS, QR_SIZE,
    SUBTITLE_ORIGIN, TITLE_ORIGIN, WATERMARK_ORIGIN,
};
use crate::png::{create_png_rgb, TextChunk};
use crate::qr::render_qr;
use crate::text::FontFace;

/// A forecast record together with its classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow<'a> {
    pub record: &'a ForecastRecord,
    pub sea_state: Classification,
    pub condition: Classification,
}

impl<'a> ForecastRow<'a> {
    pub fn classify(record: &'a ForecastRecord) -> Self {
        let waves = record.wave_height;
        Self {
            record,
            sea_state: sea_state(waves.min.0, waves.max.0).classification(),
            condition: condition(record.wind_speed, waves.max.0).classification(),
        }
    }

    /// Row tint. The condition colour always replaces the sea-state colour.
    pub fn background(&self) -> Rgb {
        self.condition.background
    }

    pub fn cells(&self) -> [String; 8] {
        self.record.cells(self.sea_state.label, self.condition.label)
    }
}

/// Draw the forecast card in memory.
pub fn render_forecast(
    records: &[ForecastRecord],
    config: &RenderConfig,
    font: &FontFace,
    generated_at: GenerationTime,
) -> ForecastResult<RgbImage> {
    let mut img = RgbImage::from_pixel(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        image::Rgb(Rgb::WHITE.to_array()),
    );

    font.draw(&mut img, &config.title, TITLE_ORIGIN, Rgb::BLACK);
    font.draw(&mut img, &generated_at.subtitle(), SUBTITLE_ORIGIN, Rgb::BLACK);

    let layout = TableLayout::new(records.len());

    draw_filled_rect_mut(
        &mut img,
        layout.header_rect(),
        image::Rgb(Rgb::LIGHT_BLUE.to_array()),
    );
    draw_cells(&mut img, font, &layout, 0, HEADERS);

    for (idx, record) in records.iter().enumerate() {
        let row = ForecastRow::classify(record);
        debug!(
            location = record.location,
            sea_state = row.sea_state.label,
            condition = row.condition.label,
            background = %row.background(),
            "Drawing forecast row"
        );

        draw_filled_rect_mut(
            &mut img,
            layout.row_rect(idx),
            image::Rgb(row.background().to_array()),
        );
        draw_cells(&mut img, font, &layout, idx + 1, row.cells());
    }

    font.draw(&mut img, &config.note, layout.note_origin(), Rgb::BLACK);

    let qr = render_qr(&config.qr_url, QR_SIZE)?;
    let qr = DynamicImage::ImageLuma8(qr).to_rgb8();
    let (qr_x, qr_y) = qr_origin();
    imageops::replace(&mut img, &qr, qr_x, qr_y);

    font.draw(&mut img, &generated_at.watermark(), WATERMARK_ORIGIN, Rgb::GRAY);

    Ok(img)
}

fn draw_cells<S: AsRef<str>>(
    img: &mut RgbImage,
    font: &FontFace,
    layout: &TableLayout,
    band: usize,
    cells: impl IntoIterator<Item = S>,
) {
    let max_width = (layout.cell_width as i32 - CELL_TEXT_INSET.0) as f32;
    for (column, cell) in cells.into_iter().enumerate() {
        let text = cell.as_ref();
        if font.text_width(text) > max_width {
            warn!(text, column, "Cell text overflows its column");
        }
        font.draw(img, text, layout.cell_origin(band, column), Rgb::BLACK);
    }
}

/// Metadata tags embedded in every forecast card.
pub fn metadata(config: &RenderConfig, generated_at: GenerationTime) -> Vec<TextChunk> {
    vec![
        TextChunk::new("Author", config.author.as_str()),
        TextChunk::new("Software", config.software.as_str()),
        TextChunk::new("DateTimeOriginal", generated_at.iso8601()),
    ]
}

/// Encode a rendered card as PNG with its metadata.
pub fn encode_forecast(
    img: &RgbImage,
    config: &RenderConfig,
    generated_at: GenerationTime,
) -> ForecastResult<Vec<u8>> {
    create_png_rgb(
        img.as_raw(),
        img.width() as usize,
        img.height() as usize,
        &metadata(config, generated_at),
    )
    .map_err(ForecastError::PngEncoding)
}

/// Render the forecast card and write it to `path`.
///
/// The font is loaded for this call only. Returns the path written.
pub fn draw_forecast(
    records: &[ForecastRecord],
    config: &RenderConfig,
    path: impl AsRef<Path>,
    generated_at: GenerationTime,
) -> ForecastResult<PathBuf> {
    let path = path.as_ref();
    let font = FontFace::load(&config.font_path, config.font_size)?;

    let img = render_forecast(records, config, &font, generated_at)?;
    let png = encode_forecast(&img, config, generated_at)?;

    std::fs::write(path, &png).map_err(|source| ForecastError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        rows = records.len(),
        bytes = png.len(),
        generated_at = %generated_at.iso8601(),
        "Wrote forecast card"
    );

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_common::{SeaState, MARINE_FORECASTS};

    #[test]
    fn test_condition_color_wins() {
        // Calm sea but too windy: sea state says green, condition says orange
        let mut record = MARINE_FORECASTS[3].clone();
        record.wind_speed = 30;
        let row = ForecastRow::classify(&record);

        assert_eq!(row.sea_state, SeaState::Calm.classification());
        assert_eq!(row.sea_state.background, Rgb::PALE_GREEN);
        assert_eq!(row.condition.label, "Avoid");
        assert_eq!(row.background(), Rgb::PALE_ORANGE);
    }

    #[test]
    fn test_row_cells() {
        let record = MARINE_FORECASTS[1].clone();
        let row = ForecastRow::classify(&record);
        assert_eq!(row.cells()[4], "0.5–1.9");
        assert_eq!(row.cells()[5], "Calm");
        assert_eq!(row.cells()[7], "Safe");
    }

    #[test]
    fn test_metadata_tags() {
        let at = GenerationTime::from_iso8601("2026-10-19T06:00:00").unwrap();
        let tags = metadata(&RenderConfig::default(), at);
        assert_eq!(tags[0], TextChunk::new("Author", "bjazzaf"));
        assert_eq!(tags[1], TextChunk::new("Software", "forecast_generator.py"));
        assert_eq!(
            tags[2],
            TextChunk::new("DateTimeOriginal", "2026-10-19T06:00:00.000000")
        );
    }

    #[test]
    fn test_draw_forecast_fails_without_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        let config = RenderConfig::default().with_font_path("/nonexistent/font.ttf");

        let err = draw_forecast(&MARINE_FORECASTS, &config, &path, GenerationTime::now())
            .unwrap_err();
        assert!(err.is_startup_error());
        assert!(!path.exists());
    }
}
