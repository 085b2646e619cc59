use std::fmt;

use crate::distance::{Distance, DisplayStyle, UnitSystem};
use crate::units::{DECIMAL_PLACES, DistanceError};

/// Order of magnitude: floor of the base-10 logarithm.
fn sig_digits(meters: f64) -> i32 {
    meters.log10().floor() as i32
}

impl Distance {
    /// Auto-scaled metric rendering, e.g. `"1.50 km"`.
    ///
    /// The unit is picked so the magnitude's order of ten falls in that
    /// unit's prefix bucket; past yotta/yocto the value saturates into
    /// `Ym`/`ym`. Only finite positive magnitudes have a defined order,
    /// anything else is [`DistanceError::InvalidMagnitude`].
    pub fn format_metric(&self) -> Result<String, DistanceError> {
        let meters = self.meters();
        if !meters.is_finite() || meters <= 0.0 {
            return Err(DistanceError::InvalidMagnitude(meters));
        }

        let order = sig_digits(meters);

        if order >= 24 {
            return Ok(format!("{} Ym", self.yottameters()));
        }
        if order <= -24 {
            return Ok(format!("{} ym", self.yoctometers()));
        }

        let (value, suffix) = match order {
            -23..=-21 => (self.zeptometers(), "zm"),
            -20..=-18 => (self.attometers(), "am"),
            -17..=-15 => (self.femtometers(), "fm"),
            -14..=-12 => (self.picometers(), "pm"),
            -11..=-9 => (self.nanometers(), "nm"),
            -8..=-6 => (self.micrometers(), "\u{3bc}m"),
            -5..=-3 => (self.millimeters(), "mm"),
            -2 => (self.centimeters(), "cm"),
            -1 => (self.decimeters(), "dm"),
            0 => (self.meters(), "m"),
            1 => (self.decameters(), "dam"),
            2 => (self.hectometers(), "hm"),
            3..=5 => (self.kilometers(), "km"),
            6..=8 => (self.megameters(), "Mm"),
            9..=11 => (self.gigameters(), "Gm"),
            12..=14 => (self.terameters(), "Tm"),
            15..=17 => (self.petameters(), "Pm"),
            18..=20 => (self.exameters(), "Em"),
            21..=23 => (self.zettameters(), "Zm"),
            _ => (self.meters(), "m"),
        };

        Ok(format!("{:.*} {}", DECIMAL_PLACES, value, suffix))
    }

    /// Imperial rendering: inches under a foot, miles from half a mile
    /// up, feet in between.
    pub fn format_imperial(&self) -> String {
        let feet = self.feet();

        if feet < 1.0 {
            return format!("{:.*} in", DECIMAL_PLACES, self.inches());
        }
        if feet >= 5280.0 / 2.0 {
            return format!("{:.*} mi", DECIMAL_PLACES, self.miles());
        }

        format!("{:.*} ft", DECIMAL_PLACES, feet)
    }

    pub fn format_astronomical(&self) -> String {
        format!("{} AU", self.astronomical_units())
    }

    /// Render for the current mode and style.
    ///
    /// Only the metric auto-scaled form can fail; plain, imperial, and
    /// astronomical renderings are total.
    pub fn to_readable(&self) -> Result<String, DistanceError> {
        if self.style() == DisplayStyle::Plain {
            return Ok(self.plain());
        }

        match self.system() {
            UnitSystem::Metric => self.format_metric(),
            UnitSystem::Imperial => Ok(self.format_imperial()),
            UnitSystem::Astronomical => Ok(self.format_astronomical()),
        }
    }

    /// Unrounded value in the mode's natural unit.
    fn plain(&self) -> String {
        match self.system() {
            UnitSystem::Metric => format!("{} m", self.meters()),
            UnitSystem::Imperial => format!("{} ft", self.feet()),
            UnitSystem::Astronomical => format!("{} AU", self.astronomical_units()),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_readable() {
            Ok(s) => f.write_str(&s),
            // no readable unit for this magnitude, fall back to the raw value
            Err(_) => f.write_str(&self.plain()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{au, feet, meters};

    #[test]
    fn test_metric_buckets() {
        assert_eq!(meters(1.0).to_string(), "1.00 m");
        assert_eq!(meters(9.99).to_string(), "9.99 m");
        assert_eq!(meters(10.0).to_string(), "1.00 dam");
        assert_eq!(meters(100.0).to_string(), "1.00 hm");
        assert_eq!(meters(1500.0).to_string(), "1.50 km");
        assert_eq!(meters(2.5e7).to_string(), "25.00 Mm");
        assert_eq!(meters(3.0e10).to_string(), "30.00 Gm");
        assert_eq!(meters(1.0e14).to_string(), "100.00 Tm");
        assert_eq!(meters(7.0e16).to_string(), "70.00 Pm");
        assert_eq!(meters(2.0e19).to_string(), "20.00 Em");
        assert_eq!(meters(5.0e22).to_string(), "50.00 Zm");
    }

    #[test]
    fn test_metric_submultiples() {
        assert_eq!(meters(0.1).to_string(), "1.00 dm");
        assert_eq!(meters(0.01).to_string(), "1.00 cm");
        assert_eq!(meters(0.005).to_string(), "5.00 mm");
        assert_eq!(meters(4.0e-7).to_string(), "0.40 \u{3bc}m");
        assert_eq!(meters(2.0e-9).to_string(), "2.00 nm");
        assert_eq!(meters(5.0e-12).to_string(), "5.00 pm");
        assert_eq!(meters(1.0e-15).to_string(), "1.00 fm");
        assert_eq!(meters(5.0e-18).to_string(), "5.00 am");
        assert_eq!(meters(3.0e-20).to_string(), "0.03 am");
        assert_eq!(meters(5.0e-21).to_string(), "5.00 zm");
    }

    #[test]
    fn test_metric_saturates_at_yotta_and_yocto() {
        assert_eq!(meters(1.0e25).to_string(), "10 Ym");
        assert_eq!(meters(1.0e-25).to_string(), "0.1 ym");
        // order 24 is already out of the zetta bucket
        assert_eq!(meters(2.0e24).to_string(), "2 Ym");
    }

    #[test]
    fn test_imperial_thresholds() {
        assert_eq!(feet(0.5).to_string(), "6.00 in");
        assert_eq!(feet(1.0).to_string(), "1.00 ft");
        assert_eq!(feet(2000.0).to_string(), "2000.00 ft");
        // half a mile switches to miles
        assert_eq!(feet(2640.0).to_string(), "0.50 mi");
        assert_eq!(feet(3000.0).to_string(), "0.57 mi");
    }

    #[test]
    fn test_astronomical_rendering() {
        assert_eq!(au(2.0).to_string(), "2 AU");
        assert_eq!(au(0.25).to_string(), "0.25 AU");
    }

    #[test]
    fn test_dispatch_follows_mode() {
        let d = meters(1500.0);
        assert_eq!(d.to_string(), "1.50 km");
        assert_eq!(d.to_imperial().to_string(), "0.93 mi");
        assert_eq!(d.to_astronomical().format_astronomical(), d.to_astronomical().to_string());
    }

    #[test]
    fn test_non_positive_metric_is_an_error() {
        assert!(matches!(
            meters(0.0).format_metric(),
            Err(DistanceError::InvalidMagnitude(_))
        ));
        assert!(matches!(
            meters(-5.0).format_metric(),
            Err(DistanceError::InvalidMagnitude(_))
        ));
        assert!(matches!(
            meters(f64::NAN).format_metric(),
            Err(DistanceError::InvalidMagnitude(_))
        ));

        // Display falls back to the raw value instead of failing
        assert_eq!(meters(0.0).to_string(), "0 m");
        assert_eq!(meters(-5.0).to_string(), "-5 m");
    }

    #[test]
    fn test_plain_style() {
        assert_eq!(
            meters(1500.0).with_style(DisplayStyle::Plain).to_string(),
            "1500 m"
        );
        assert_eq!(
            au(2.0).with_style(DisplayStyle::Plain).to_string(),
            "2 AU"
        );
    }
}
