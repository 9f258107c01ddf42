//! Common types shared by the forecast renderer and the generator service.

pub mod classify;
pub mod error;
pub mod forecast;
pub mod time;

pub use classify::{condition, sea_state, Classification, Condition, Rgb, SeaState};
pub use error::{ForecastError, ForecastResult};
pub use forecast::{CompassPoint, Feet, ForecastRecord, Span, MARINE_FORECASTS};
pub use time::{GenerationTime, TimeParseError};
