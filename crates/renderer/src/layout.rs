//! Fixed geometry of the forecast card.
//!
//! The table is a stack of bands: band 0 is the header, band `k + 1` is
//! data row `k`. Rectangles are inclusive of both corners, so adjacent
//! bands share a one-pixel seam that the later band paints over.

use imageproc::rect::Rect;

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 600;

pub const TABLE_LEFT: i32 = 50;
pub const TABLE_TOP: i32 = 100;
pub const CELL_WIDTH: u32 = 140;
pub const ROW_HEIGHT: u32 = 40;

/// Offset of cell text from the cell's top-left corner.
pub const CELL_TEXT_INSET: (i32, i32) = (5, 10);

/// Distance from the top of the last band to the note line.
pub const NOTE_GAP: i32 = 60;

pub const TITLE_ORIGIN: (i32, i32) = (CANVAS_WIDTH as i32 / 2 - 160, 20);
pub const SUBTITLE_ORIGIN: (i32, i32) = (CANVAS_WIDTH as i32 / 2 - 130, 50);

pub const QR_SIZE: u32 = 100;
/// QR top-left corner, measured back from the bottom-right canvas corner.
pub const QR_INSET: u32 = 120;

pub const WATERMARK_ORIGIN: (i32, i32) = (10, CANVAS_HEIGHT as i32 - 30);

pub const HEADERS: [&str; 8] = [
    "Location",
    "Temp (°C)",
    "Wind (km/h)",
    "Dir",
    "Wave (ft)",
    "Sea State",
    "Humidity (%)",
    "Condition",
];

/// Table geometry for a given number of data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub left: i32,
    pub top: i32,
    pub columns: usize,
    pub data_rows: usize,
    pub cell_width: u32,
    pub row_height: u32,
}

impl TableLayout {
    pub fn new(data_rows: usize) -> Self {
        Self {
            left: TABLE_LEFT,
            top: TABLE_TOP,
            columns: HEADERS.len(),
            data_rows,
            cell_width: CELL_WIDTH,
            row_height: ROW_HEIGHT,
        }
    }

    /// Total width spanned by the columns.
    pub fn width(&self) -> u32 {
        self.columns as u32 * self.cell_width
    }

    /// Number of bands including the header.
    pub fn bands(&self) -> usize {
        self.data_rows + 1
    }

    pub fn band_top(&self, band: usize) -> i32 {
        self.top + band as i32 * self.row_height as i32
    }

    pub fn band_rect(&self, band: usize) -> Rect {
        Rect::at(self.left, self.band_top(band)).of_size(self.width() + 1, self.row_height + 1)
    }

    pub fn header_rect(&self) -> Rect {
        self.band_rect(0)
    }

    pub fn row_rect(&self, row: usize) -> Rect {
        self.band_rect(row + 1)
    }

    /// Where the text of a cell starts.
    pub fn cell_origin(&self, band: usize, column: usize) -> (i32, i32) {
        (
            self.left + column as i32 * self.cell_width as i32 + CELL_TEXT_INSET.0,
            self.band_top(band) + CELL_TEXT_INSET.1,
        )
    }

    /// Note line origin, below the last band.
    pub fn note_origin(&self) -> (i32, i32) {
        (self.left, self.band_top(self.bands() - 1) + NOTE_GAP)
    }
}

/// Top-left corner of the pasted QR code.
pub fn qr_origin() -> (i64, i64) {
    (
        (CANVAS_WIDTH - QR_INSET) as i64,
        (CANVAS_HEIGHT - QR_INSET) as i64,
    )
}
