use serde::{Deserialize, Serialize};

use crate::units::{self, AU_TO_METERS, METERS_TO_FEET, ROUND_DIGITS, round_to};

/// The unit system a distance presents itself in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
    Astronomical,
}

/// How a distance renders: auto-scaled to a readable unit, or the raw
/// value in the mode's natural unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayStyle {
    #[default]
    Readable,
    Plain,
}

/// A linear distance, stored normalized in meters.
///
/// Every other unit is derived on demand; changing the unit system
/// produces a new value and never touches the magnitude.
///
/// # Examples
/// ```
/// use distances::meters;
///
/// let d = meters(1500.0);
/// assert_eq!(d.kilometers(), 1.5);
/// assert_eq!(d.to_string(), "1.50 km");
/// assert_eq!(d.to_imperial().to_string(), "0.93 mi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    meters: f64,
    system: UnitSystem,
    #[serde(default)]
    style: DisplayStyle,
}

impl Default for Distance {
    fn default() -> Self {
        Self {
            meters: 0.0,
            system: UnitSystem::Metric,
            style: DisplayStyle::Readable,
        }
    }
}

impl Distance {
    /// Build a distance from a value in the system's natural unit
    /// (meters, feet, or astronomical units).
    pub fn new(value: f64, system: UnitSystem) -> Self {
        let meters = match system {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => units::feet_to_meters(value),
            UnitSystem::Astronomical => units::au_to_meters(value),
        };

        Self {
            meters,
            system,
            style: DisplayStyle::Readable,
        }
    }

    pub fn with_style(self, style: DisplayStyle) -> Self {
        Self { style, ..self }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Same magnitude, metric presentation.
    pub fn to_metric(self) -> Self {
        Self {
            system: UnitSystem::Metric,
            ..self
        }
    }

    /// Same magnitude, imperial presentation.
    pub fn to_imperial(self) -> Self {
        Self {
            system: UnitSystem::Imperial,
            ..self
        }
    }

    /// Same magnitude, astronomical presentation.
    pub fn to_astronomical(self) -> Self {
        Self {
            system: UnitSystem::Astronomical,
            ..self
        }
    }

    /// Numeric value in the mode's natural unit: meters when metric,
    /// feet when imperial, astronomical units when astronomical.
    pub fn to_f64(&self) -> f64 {
        match self.system {
            UnitSystem::Metric => self.meters(),
            UnitSystem::Imperial => self.feet(),
            UnitSystem::Astronomical => self.astronomical_units(),
        }
    }

    // Metric ladder. Everything but the base accessor is rounded to
    // ROUND_DIGITS fractional digits.

    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn decameters(&self) -> f64 {
        round_to(self.meters / 10.0, ROUND_DIGITS)
    }

    pub fn hectometers(&self) -> f64 {
        round_to(self.meters / 100.0, ROUND_DIGITS)
    }

    pub fn kilometers(&self) -> f64 {
        round_to(self.meters / 1000.0, ROUND_DIGITS)
    }

    pub fn megameters(&self) -> f64 {
        round_to(self.meters / 1e6, ROUND_DIGITS)
    }

    pub fn gigameters(&self) -> f64 {
        round_to(self.meters / 1e9, ROUND_DIGITS)
    }

    pub fn terameters(&self) -> f64 {
        round_to(self.meters / 1e12, ROUND_DIGITS)
    }

    pub fn petameters(&self) -> f64 {
        round_to(self.meters / 1e15, ROUND_DIGITS)
    }

    pub fn exameters(&self) -> f64 {
        round_to(self.meters / 1e18, ROUND_DIGITS)
    }

    pub fn zettameters(&self) -> f64 {
        round_to(self.meters / 1e21, ROUND_DIGITS)
    }

    pub fn yottameters(&self) -> f64 {
        round_to(self.meters / 1e24, ROUND_DIGITS)
    }

    pub fn decimeters(&self) -> f64 {
        round_to(self.meters * 10.0, ROUND_DIGITS)
    }

    pub fn centimeters(&self) -> f64 {
        round_to(self.meters * 100.0, ROUND_DIGITS)
    }

    pub fn millimeters(&self) -> f64 {
        round_to(self.meters * 1000.0, ROUND_DIGITS)
    }

    pub fn micrometers(&self) -> f64 {
        round_to(self.meters * 1e6, ROUND_DIGITS)
    }

    pub fn nanometers(&self) -> f64 {
        round_to(self.meters * 1e9, ROUND_DIGITS)
    }

    pub fn picometers(&self) -> f64 {
        round_to(self.meters * 1e12, ROUND_DIGITS)
    }

    pub fn femtometers(&self) -> f64 {
        round_to(self.meters * 1e15, ROUND_DIGITS)
    }

    pub fn attometers(&self) -> f64 {
        round_to(self.meters * 1e18, ROUND_DIGITS)
    }

    pub fn zeptometers(&self) -> f64 {
        round_to(self.meters * 1e21, ROUND_DIGITS)
    }

    pub fn yoctometers(&self) -> f64 {
        round_to(self.meters * 1e24, ROUND_DIGITS)
    }

    // Imperial ladder. Raw floating-point pass-throughs, everything
    // hangs off the feet projection.

    pub fn feet(&self) -> f64 {
        self.meters * METERS_TO_FEET
    }

    pub fn inches(&self) -> f64 {
        self.feet() * 12.0
    }

    pub fn thous(&self) -> f64 {
        self.inches() * 1000.0
    }

    pub fn yards(&self) -> f64 {
        self.feet() / 3.0
    }

    pub fn chains(&self) -> f64 {
        self.feet() / 66.0
    }

    pub fn furlongs(&self) -> f64 {
        self.feet() / 660.0
    }

    pub fn miles(&self) -> f64 {
        self.feet() / 5280.0
    }

    pub fn leagues(&self) -> f64 {
        self.feet() / 15840.0
    }

    pub fn fathoms(&self) -> f64 {
        self.feet() / 6.0
    }

    pub fn cables(&self) -> f64 {
        self.feet() / 608.0
    }

    pub fn nautical_miles(&self) -> f64 {
        self.feet() / 6080.0
    }

    pub fn astronomical_units(&self) -> f64 {
        self.meters / AU_TO_METERS
    }
}

/// A distance of `value` meters, metric mode.
pub fn meters(value: f64) -> Distance {
    Distance::new(value, UnitSystem::Metric)
}

/// A distance of `value` feet, imperial mode.
pub fn feet(value: f64) -> Distance {
    Distance::new(value, UnitSystem::Imperial)
}

/// A distance of `value` inches, imperial mode.
pub fn inches(value: f64) -> Distance {
    feet(value / 12.0)
}

/// A distance of `value` miles, imperial mode.
pub fn miles(value: f64) -> Distance {
    feet(value * 5280.0)
}

/// A distance of `value` astronomical units, astronomical mode.
pub fn au(value: f64) -> Distance {
    Distance::new(value, UnitSystem::Astronomical)
}
