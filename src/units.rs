use serde::{Deserialize, Serialize};

use crate::distance::{Distance, au, feet, inches, meters, miles};

// Standard unit we use internally (just documentation)
/// Internal standard: meters
pub const INTERNAL_LENGTH_UNIT: &str = "meters";

/// Survey-style meters to feet factor; not the exact inverse of [`FEET_TO_METERS`].
pub const METERS_TO_FEET: f64 = 3.28084;
pub const FEET_TO_METERS: f64 = 0.3048;
pub const AU_TO_METERS: f64 = 149_597_870_691.0;

/// Fractional digits kept by the metric accessor ladder.
pub const ROUND_DIGITS: usize = 13;
/// Fixed decimal places used by the readable renderers.
pub const DECIMAL_PLACES: usize = 2;

#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

#[inline]
pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU_TO_METERS
}

#[inline]
pub fn au_to_meters(au: f64) -> f64 {
    au * AU_TO_METERS
}

/// Round to a fixed number of fractional digits.
///
/// Goes through the decimal rendering rather than a scale-and-round so
/// that values like `0.1 + 0.2` come back as exactly `0.3`.
pub(crate) fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    #[error("Unknown distance unit: {0}")]
    InvalidUnit(String),

    #[error("No readable unit for non-positive distance: {0} m")]
    InvalidMagnitude(f64),
}

/// A raw `value` + `unit` tag pair, the exchange form for anything that
/// hands distances across a serialization boundary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

impl UnitValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn to_distance(&self) -> Result<Distance, DistanceError> {
        match self.unit.as_str() {
            "m" | "M"
            | "meter" | "Meter" | "METER"
            | "metre" | "Metre" | "METRE"
            | "meters" | "Meters" | "METERS"
            | "metres" | "Metres" | "METRES" => Ok(meters(self.value)),
            "ft" | "Ft" | "FT"
            | "foot" | "Foot" | "FOOT"
            | "feet" | "Feet" | "FEET" => Ok(feet(self.value)),
            "in" | "In" | "IN"
            | "inch" | "Inch" | "INCH"
            | "inches" | "Inches" | "INCHES" => Ok(inches(self.value)),
            "mi" | "Mi" | "MI"
            | "mile" | "Mile" | "MILE"
            | "miles" | "Miles" | "MILES" => Ok(miles(self.value)),
            "au" | "Au" | "AU"
            | "astronomical unit" | "Astronomical Unit" | "ASTRONOMICAL UNIT"
            | "astronomical units" | "Astronomical Units" | "ASTRONOMICAL UNITS" => {
                Ok(au(self.value))
            }
            _ => Err(DistanceError::InvalidUnit(self.unit.clone())),
        }
    }

    pub fn from_distance(distance: Distance, unit: &str) -> Result<Self, DistanceError> {
        let value = match unit {
            "m" | "M"
            | "meter" | "Meter" | "METER"
            | "metre" | "Metre" | "METRE"
            | "meters" | "Meters" | "METERS"
            | "metres" | "Metres" | "METRES" => distance.meters(),
            "ft" | "Ft" | "FT"
            | "foot" | "Foot" | "FOOT"
            | "feet" | "Feet" | "FEET" => distance.feet(),
            "in" | "In" | "IN"
            | "inch" | "Inch" | "INCH"
            | "inches" | "Inches" | "INCHES" => distance.inches(),
            "mi" | "Mi" | "MI"
            | "mile" | "Mile" | "MILE"
            | "miles" | "Miles" | "MILES" => distance.miles(),
            "au" | "Au" | "AU"
            | "astronomical unit" | "Astronomical Unit" | "ASTRONOMICAL UNIT"
            | "astronomical units" | "Astronomical Units" | "ASTRONOMICAL UNITS" => {
                distance.astronomical_units()
            }
            _ => return Err(DistanceError::InvalidUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}
