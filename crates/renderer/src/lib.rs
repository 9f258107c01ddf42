//! Image rendering for marine forecast cards.
//!
//! Implements:
//! - Table layout and drawing
//! - Text rendering with a TrueType font
//! - QR code rasterisation
//! - PNG encoding with `tEXt` metadata

pub mod config;
pub mod layout;
pub mod png;
pub mod qr;
pub mod table;
pub mod text;

pub use config::RenderConfig;
pub use table::{draw_forecast, encode_forecast, render_forecast, ForecastRow};
pub use text::FontFace;
