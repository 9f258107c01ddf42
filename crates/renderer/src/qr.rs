//! QR code rasterisation.

use forecast_common::{ForecastError, ForecastResult};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

/// Light modules surrounding the symbol on each side.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Pixels per module before resizing.
pub const MODULE_PIXELS: u32 = 10;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterise `data` as a QR symbol at `MODULE_PIXELS` per module, with a
/// quiet zone. Error correction level M.
pub fn qr_matrix_image(data: &str) -> ForecastResult<GrayImage> {
    let code =
        QrCode::new(data.as_bytes()).map_err(|e| ForecastError::QrEncoding(e.to_string()))?;

    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;

    let img = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_PIXELS) as i64 - QUIET_ZONE_MODULES as i64;
        let my = (y / MODULE_PIXELS) as i64 - QUIET_ZONE_MODULES as i64;
        if mx < 0 || my < 0 || mx >= modules as i64 || my >= modules as i64 {
            return LIGHT;
        }
        match colors[(my as u32 * modules + mx as u32) as usize] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    Ok(img)
}

/// Render `data` as a QR code scaled to exactly `size`×`size` pixels.
pub fn render_qr(data: &str, size: u32) -> ForecastResult<GrayImage> {
    let matrix = qr_matrix_image(data)?;
    tracing::debug!(
        source_px = matrix.width(),
        target_px = size,
        "Resizing QR code"
    );
    Ok(imageops::resize(&matrix, size, size, FilterType::Nearest))
}
