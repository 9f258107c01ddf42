//! Generation timestamps and their display formats.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Moment a forecast image was generated (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTime(DateTime<Utc>);

impl GenerationTime {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Subtitle under the title, e.g. `(Monday - October 19, 2026)`.
    pub fn subtitle(&self) -> String {
        self.0.format("(%A - %B %d, %Y)").to_string()
    }

    /// Watermark text, e.g. `Generated: 2026-10-19 08:30 UTC`.
    pub fn watermark(&self) -> String {
        self.0.format("Generated: %Y-%m-%d %H:%M UTC").to_string()
    }

    /// ISO 8601 timestamp with microseconds and no offset suffix, stored
    /// in the `DateTimeOriginal` metadata tag.
    pub fn iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// Parse an ISO 8601 string, assuming UTC when no offset is given.
    pub fn from_iso8601(s: &str) -> Result<Self, TimeParseError> {
        // Full datetime with timezone
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        // Without timezone, fractional seconds optional
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(Utc.from_utc_datetime(&ndt)));
        }

        Err(TimeParseError::InvalidFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("Invalid ISO 8601 timestamp: {0}")]
    InvalidFormat(String),
}
