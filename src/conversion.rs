use uom::si::f64::Length;
use uom::si::length::meter;

use crate::distance::{Distance, meters};

/// Convert a distance into a uom `Length` through the meter base unit
#[inline]
pub fn to_length(distance: &Distance) -> Length {
    Length::new::<meter>(distance.meters())
}

/// Wrap a uom `Length` as a metric-mode distance
#[inline]
pub fn from_length(length: Length) -> Distance {
    meters(length.get::<meter>())
}

impl From<Length> for Distance {
    fn from(length: Length) -> Self {
        from_length(length)
    }
}

impl From<Distance> for Length {
    fn from(distance: Distance) -> Self {
        to_length(&distance)
    }
}
