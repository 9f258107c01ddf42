//! Sea-state and safety classification of forecast rows.
//!
//! Both classifiers are pure functions of their numeric inputs. Each
//! result carries a label and the background tint used for the table row.

use std::fmt;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    /// Row tint for benign conditions (#EAF4E2)
    pub const PALE_GREEN: Rgb = Rgb(0xEA, 0xF4, 0xE2);
    /// Row tint for hazardous conditions (#FCE6D3)
    pub const PALE_ORANGE: Rgb = Rgb(0xFC, 0xE6, 0xD3);
    /// Header band tint (#D9EDF7)
    pub const LIGHT_BLUE: Rgb = Rgb(0xD9, 0xED, 0xF7);

    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// A label together with its row background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub label: &'static str,
    pub background: Rgb,
}

/// Wave severity derived from the mean wave height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeaState {
    Calm,
    Moderate,
    Rough,
    VeryRough,
}

/// Upper bounds (inclusive, feet) of each sea state.
const CALM_MAX_FT: f64 = 1.5;
const MODERATE_MAX_FT: f64 = 3.9;
const ROUGH_MAX_FT: f64 = 6.5;

impl SeaState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Moderate => "Moderate",
            Self::Rough => "Rough",
            Self::VeryRough => "Very Rough",
        }
    }

    pub fn background(&self) -> Rgb {
        match self {
            Self::Calm | Self::Moderate => Rgb::PALE_GREEN,
            Self::Rough | Self::VeryRough => Rgb::PALE_ORANGE,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            label: self.label(),
            background: self.background(),
        }
    }
}

/// Classify the sea state from a wave height range in feet.
pub fn sea_state(min_ft: f64, max_ft: f64) -> SeaState {
    let avg = (min_ft + max_ft) / 2.0;
    if avg <= CALM_MAX_FT {
        SeaState::Calm
    } else if avg <= MODERATE_MAX_FT {
        SeaState::Moderate
    } else if avg <= ROUGH_MAX_FT {
        SeaState::Rough
    } else {
        SeaState::VeryRough
    }
}

/// Go/no-go verdict for small craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Safe,
    Avoid,
}

/// Wind speed (km/h) at or above which conditions are unsafe.
const WIND_LIMIT_KMH: u32 = 25;
/// Peak wave height (feet) at or above which conditions are unsafe.
const WAVE_LIMIT_FT: f64 = 3.0;

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Avoid => "Avoid",
        }
    }

    pub fn background(&self) -> Rgb {
        match self {
            Self::Safe => Rgb::PALE_GREEN,
            Self::Avoid => Rgb::PALE_ORANGE,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            label: self.label(),
            background: self.background(),
        }
    }
}

/// Classify safety from wind speed (km/h) and peak wave height (feet).
pub fn condition(wind_kmh: u32, max_wave_ft: f64) -> Condition {
    if wind_kmh < WIND_LIMIT_KMH && max_wave_ft < WAVE_LIMIT_FT {
        Condition::Safe
    } else {
        Condition::Avoid
    }
}
