//! Tests for forecast card rendering.
//!
//! Rendering tests need a bold DejaVu font and are skipped when the host
//! does not have one installed.

use chrono::{TimeZone, Utc};
use forecast_common::{GenerationTime, Rgb, MARINE_FORECASTS};
use image::RgbImage;
use renderer::layout::{
    qr_origin, TableLayout, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_TEXT_INSET, CELL_WIDTH, HEADERS,
    QR_SIZE,
};
use renderer::png::{read_dimensions, read_text_chunks};
use renderer::{draw_forecast, render_forecast, FontFace, RenderConfig};
use test_utils::{require_font, scratch_dir};

// ============================================================================
// Helper functions
// ============================================================================

fn at(day: u32, hour: u32) -> GenerationTime {
    GenerationTime::new(Utc.with_ymd_and_hms(2026, 10, day, hour, 15, 0).unwrap())
}

fn pixel(img: &RgbImage, x: i32, y: i32) -> Rgb {
    let p = img.get_pixel(x as u32, y as u32).0;
    Rgb(p[0], p[1], p[2])
}

/// Sample near the right edge of a band, clear of any cell text.
fn band_color(img: &RgbImage, layout: &TableLayout, band: usize) -> Rgb {
    let rect = layout.band_rect(band);
    pixel(img, rect.right() - 4, rect.top() + 2)
}

/// Count consecutive tinted bands starting at the header.
fn count_bands(img: &RgbImage, layout: &TableLayout) -> usize {
    let x = layout.band_rect(0).right() - 4;
    let mut bands = 0;
    let mut y = layout.top + 2;
    while (y as u32) < CANVAS_HEIGHT && pixel(img, x, y) != Rgb::WHITE {
        bands += 1;
        y += layout.row_height as i32;
    }
    bands
}

// ============================================================================
// Font-independent tests
// ============================================================================

#[test]
fn test_layout_for_dataset() {
    let layout = TableLayout::new(MARINE_FORECASTS.len());
    assert_eq!(layout.bands(), 5);
    assert_eq!(layout.width(), 8 * 140);
    assert_eq!(HEADERS.len(), layout.columns);
}

// ============================================================================
// Rendering tests
// ============================================================================

#[test]
fn test_render_canvas_size() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();

    let img = render_forecast(&MARINE_FORECASTS, &config, &font, at(19, 8)).unwrap();
    assert_eq!(img.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn test_render_header_and_four_rows() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();
    let layout = TableLayout::new(MARINE_FORECASTS.len());

    let img = render_forecast(&MARINE_FORECASTS, &config, &font, at(19, 8)).unwrap();

    assert_eq!(band_color(&img, &layout, 0), Rgb::LIGHT_BLUE);
    for band in 1..=4 {
        // Every record in the dataset is Safe
        assert_eq!(band_color(&img, &layout, band), Rgb::PALE_GREEN, "band {}", band);
    }
    assert_eq!(count_bands(&img, &layout), 5);
}

#[test]
fn test_render_avoid_row_is_orange() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();

    let mut records = MARINE_FORECASTS.to_vec();
    records[2].wind_speed = 40;
    let layout = TableLayout::new(records.len());

    let img = render_forecast(&records, &config, &font, at(19, 8)).unwrap();
    assert_eq!(band_color(&img, &layout, 3), Rgb::PALE_ORANGE);
    assert_eq!(band_color(&img, &layout, 2), Rgb::PALE_GREEN);
}

#[test]
fn test_render_text_is_drawn() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();
    let layout = TableLayout::new(MARINE_FORECASTS.len());

    let img = render_forecast(&MARINE_FORECASTS, &config, &font, at(19, 8)).unwrap();

    // The first header cell should contain dark glyph pixels
    let (x0, y0) = layout.cell_origin(0, 0);
    let dark = (x0..x0 + 80)
        .flat_map(|x| (y0..y0 + 25).map(move |y| (x, y)))
        .filter(|&(x, y)| pixel(&img, x, y).0 < 100)
        .count();
    assert!(dark > 20, "expected glyph pixels in header cell, found {}", dark);
}

#[test]
fn test_render_pastes_qr_code() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();

    let img = render_forecast(&MARINE_FORECASTS, &config, &font, at(19, 8)).unwrap();

    let (qx, qy) = qr_origin();
    let (qx, qy) = (qx as i32, qy as i32);
    let qr_pixels: Vec<Rgb> = (qx..qx + QR_SIZE as i32)
        .flat_map(|x| (qy..qy + QR_SIZE as i32).map(move |y| (x, y)))
        .map(|(x, y)| pixel(&img, x, y))
        .collect();
    assert!(qr_pixels.contains(&Rgb::BLACK));
    assert!(qr_pixels.iter().all(|p| *p == Rgb::BLACK || *p == Rgb::WHITE));
}

#[test]
fn test_font_fits_header_columns() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let font = FontFace::load(&config.font_path, config.font_size).unwrap();

    // Usable width is the column minus the left text inset
    let usable = (CELL_WIDTH as i32 - CELL_TEXT_INSET.0) as f32;
    for header in HEADERS {
        assert!(font.text_width(header) < usable, "{} overflows", header);
    }
}

#[test]
fn test_font_size_is_em_size() {
    let font_path = require_font!();
    let font = FontFace::load(font_path, 18.0).unwrap();

    // DejaVu Sans Bold: ascent - descent = 2384 units, 'H' advance = 1714 units, 2048 per em
    let expected_line = 18.0 * 2384.0 / 2048.0;
    let expected_h = 18.0 * 1714.0 / 2048.0;
    assert!(
        (font.line_height() - expected_line).abs() < 0.05,
        "line height {}",
        font.line_height()
    );
    assert!(
        (font.text_width("H") - expected_h).abs() < 0.1,
        "'H' advance {}",
        font.text_width("H")
    );
}

// ============================================================================
// File output tests
// ============================================================================

#[test]
fn test_draw_forecast_writes_png_with_metadata() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let dir = scratch_dir();
    let path = dir.path().join("forecast_today.png");
    let generated_at = at(19, 8);

    let written = draw_forecast(&MARINE_FORECASTS, &config, &path, generated_at).unwrap();
    assert_eq!(written, path);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(read_dimensions(&bytes).unwrap(), (1200, 600));

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);

    let tags = read_text_chunks(&bytes).unwrap();
    let tag = |key: &str| {
        tags.iter()
            .find(|t| t.keyword == key)
            .map(|t| t.text.clone())
            .unwrap()
    };
    assert_eq!(tag("Author"), "bjazzaf");
    assert_eq!(tag("Software"), "forecast_generator.py");
    let stamp = GenerationTime::from_iso8601(&tag("DateTimeOriginal")).unwrap();
    assert_eq!(stamp, generated_at);
}

#[test]
fn test_two_cards_share_table_but_not_timestamps() {
    let font_path = require_font!();
    let config = RenderConfig::default().with_font_path(font_path);
    let dir = scratch_dir();
    let today = dir.path().join("forecast_today.png");
    let tomorrow = dir.path().join("forecast_tomorrow.png");

    draw_forecast(&MARINE_FORECASTS, &config, &today, at(19, 8)).unwrap();
    draw_forecast(&MARINE_FORECASTS, &config, &tomorrow, at(20, 9)).unwrap();

    let a = image::open(&today).unwrap().to_rgb8();
    let b = image::open(&tomorrow).unwrap().to_rgb8();

    // Table region (header through last row) is identical
    let layout = TableLayout::new(MARINE_FORECASTS.len());
    let top = layout.top as u32;
    let bottom = layout.row_rect(3).bottom() as u32;
    for y in top..=bottom {
        for x in 0..CANVAS_WIDTH {
            assert_eq!(a.get_pixel(x, y), b.get_pixel(x, y), "pixel ({}, {})", x, y);
        }
    }

    // Watermark strip differs
    let watermark_rows = (CANVAS_HEIGHT - 30)..CANVAS_HEIGHT;
    let differs = watermark_rows
        .flat_map(|y| (0..400).map(move |x| (x, y)))
        .any(|(x, y)| a.get_pixel(x, y) != b.get_pixel(x, y));
    assert!(differs, "watermarks should differ");

    let stamp = |path: &std::path::Path| {
        read_text_chunks(&std::fs::read(path).unwrap())
            .unwrap()
            .into_iter()
            .find(|t| t.keyword == "DateTimeOriginal")
            .unwrap()
            .text
    };
    assert_ne!(stamp(today.as_path()), stamp(tomorrow.as_path()));
}
