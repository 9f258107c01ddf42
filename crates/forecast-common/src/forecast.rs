//! Forecast records and the fixed marine dataset.

use std::fmt;

/// Inclusive `min–max` span rendered with an en dash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{}", self.min, self.max)
    }
}

/// Wave height in feet.
///
/// Displays with at least one fractional digit, so `1.0` stays `"1.0"`
/// rather than collapsing to `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Feet(pub f64);

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Eight-point compass direction the wind blows towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Arrow glyph pointing in this direction.
    pub fn arrow(&self) -> char {
        match self {
            Self::N => '↑',
            Self::NE => '↗',
            Self::E => '→',
            Self::SE => '↘',
            Self::S => '↓',
            Self::SW => '↙',
            Self::W => '←',
            Self::NW => '↖',
        }
    }

    /// Cardinal abbreviation ("N", "NE", ...).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrow(), self.abbreviation())
    }
}

/// Forecast values for a single location.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub location: &'static str,
    /// Temperature in °C
    pub temperature: Span<i32>,
    /// Wind speed in km/h
    pub wind_speed: u32,
    pub wind_direction: CompassPoint,
    pub wave_height: Span<Feet>,
    /// Relative humidity in percent
    pub humidity: Span<u8>,
}

impl ForecastRecord {
    /// The eight table cells for this record, left to right, ending with
    /// the given sea-state and condition labels.
    pub fn cells(&self, sea_state: &str, condition: &str) -> [String; 8] {
        [
            self.location.to_string(),
            self.temperature.to_string(),
            self.wind_speed.to_string(),
            self.wind_direction.to_string(),
            self.wave_height.to_string(),
            sea_state.to_string(),
            self.humidity.to_string(),
            condition.to_string(),
        ]
    }
}

/// Static marine forecast for the four offshore islands.
pub const MARINE_FORECASTS: [ForecastRecord; 4] = [
    ForecastRecord {
        location: "Qaruh",
        temperature: Span::new(31, 36),
        wind_speed: 22,
        wind_direction: CompassPoint::NE,
        wave_height: Span::new(Feet(0.8), Feet(2.3)),
        humidity: Span::new(58, 71),
    },
    ForecastRecord {
        location: "Umm Al-Maradim",
        temperature: Span::new(30, 35),
        wind_speed: 19,
        wind_direction: CompassPoint::N,
        wave_height: Span::new(Feet(0.5), Feet(1.9)),
        humidity: Span::new(55, 68),
    },
    ForecastRecord {
        location: "Kubbar",
        temperature: Span::new(32, 37),
        wind_speed: 24,
        wind_direction: CompassPoint::E,
        wave_height: Span::new(Feet(1.1), Feet(2.7)),
        humidity: Span::new(60, 74),
    },
    ForecastRecord {
        location: "Az Zawr",
        temperature: Span::new(30, 34),
        wind_speed: 17,
        wind_direction: CompassPoint::NW,
        wave_height: Span::new(Feet(0.3), Feet(1.2)),
        humidity: Span::new(52, 66),
    },
];
