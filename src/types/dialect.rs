//! Sentence dialect and display mode enumerations.

use crate::error::GpsError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sentence-field layout the decoder applies.
///
/// The legacy firmware selected this at compile time; here it is a value
/// chosen when the decoder is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dialect {
    /// Full display build: RMC date, GGA HDOP and VTG sentences are decoded.
    #[default]
    Standard,
    /// APRS tracker build: no date, no HDOP, no VTG; RMC position fields
    /// are skipped since GGA already provides them.
    Aprs,
}

impl FromStr for Dialect {
    type Err = GpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Dialect::Standard),
            "aprs" => Ok(Dialect::Aprs),
            other => Err(GpsError::UnknownDialect(other.to_string())),
        }
    }
}

/// The six screens of the 2x16 character display, in button-cycling order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    TimeLocator,
    #[default]
    DateTime,
    LatLon,
    LocatorAltitude,
    SpeedRoute,
    Dop,
}

impl DisplayMode {
    /// The next screen in the cycle, wrapping back to the first.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::TimeLocator => DisplayMode::DateTime,
            DisplayMode::DateTime => DisplayMode::LatLon,
            DisplayMode::LatLon => DisplayMode::LocatorAltitude,
            DisplayMode::LocatorAltitude => DisplayMode::SpeedRoute,
            DisplayMode::SpeedRoute => DisplayMode::Dop,
            DisplayMode::Dop => DisplayMode::TimeLocator,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = GpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time-locator" | "timelocator" => Ok(DisplayMode::TimeLocator),
            "date-time" | "datetime" => Ok(DisplayMode::DateTime),
            "lat-lon" | "latlon" => Ok(DisplayMode::LatLon),
            "locator-altitude" | "locatoraltitude" => Ok(DisplayMode::LocatorAltitude),
            "speed-route" | "speedroute" => Ok(DisplayMode::SpeedRoute),
            "dop" => Ok(DisplayMode::Dop),
            other => Err(GpsError::UnknownDisplayMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_str() {
        assert_eq!("standard".parse::<Dialect>().unwrap(), Dialect::Standard);
        assert_eq!("APRS".parse::<Dialect>().unwrap(), Dialect::Aprs);
        assert!("nmea2000".parse::<Dialect>().is_err());
    }

    #[test]
    fn display_mode_cycle_wraps() {
        let mut mode = DisplayMode::TimeLocator;
        for _ in 0..6 {
            mode = mode.next();
        }
        assert_eq!(mode, DisplayMode::TimeLocator);
    }
}
