//! Integer-valued geographic coordinates.
//!
//! Storage and comparison stay in fixed-point micro-degrees so that two
//! phantom nodes projected onto the same point compare equal regardless of
//! the floating-point path that produced them. Floating point is used only
//! at the edges: bearing computation and polyline encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_PRECISION;

/// A latitude/longitude pair stored as signed micro-degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedPointCoordinate {
    pub lat: i32,
    pub lon: i32,
}

impl FixedPointCoordinate {
    pub const fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat: (lat * COORDINATE_PRECISION as f64).round() as i32,
            lon: (lon * COORDINATE_PRECISION as f64).round() as i32,
        }
    }

    pub fn lat_degrees(&self) -> f64 {
        self.lat as f64 / COORDINATE_PRECISION as f64
    }

    pub fn lon_degrees(&self) -> f64 {
        self.lon as f64 / COORDINATE_PRECISION as f64
    }

    /// Initial great-circle bearing from `self` to `other`, in degrees,
    /// normalized to `[0, 360)`.
    pub fn bearing_to(&self, other: &FixedPointCoordinate) -> f64 {
        let lat1 = self.lat_degrees().to_radians();
        let lat2 = other.lat_degrees().to_radians();
        let delta_lon = (other.lon_degrees() - self.lon_degrees()).to_radians();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        let bearing = y.atan2(x).to_degrees();
        (bearing + 360.0) % 360.0
    }
}

impl fmt::Display for FixedPointCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat_degrees(), self.lon_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_degrees() {
        let c = FixedPointCoordinate::from_degrees(48.8566, 2.3522);
        assert!((c.lat_degrees() - 48.8566).abs() < 1e-6);
        assert!((c.lon_degrees() - 2.3522).abs() < 1e-6);
    }

    #[test]
    fn bearing_due_north_is_zero() {
        let a = FixedPointCoordinate::from_degrees(48.0, 2.0);
        let b = FixedPointCoordinate::from_degrees(49.0, 2.0);
        let bearing = a.bearing_to(&b);
        assert!(bearing.abs() < 1e-6 || (bearing - 360.0).abs() < 1e-6);
    }

    #[test]
    fn bearing_due_east_is_ninety() {
        let a = FixedPointCoordinate::from_degrees(0.0, 2.0);
        let b = FixedPointCoordinate::from_degrees(0.0, 3.0);
        let bearing = a.bearing_to(&b);
        assert!((bearing - 90.0).abs() < 1e-6);
    }

    #[test]
    fn bearing_stays_in_range() {
        let a = FixedPointCoordinate::from_degrees(10.0, 10.0);
        let b = FixedPointCoordinate::from_degrees(5.0, -5.0);
        let bearing = a.bearing_to(&b);
        assert!((0.0..360.0).contains(&bearing));
    }
}
