//! Fixed-point coordinate scale and other crate-wide numeric constants.

/// Coordinates are stored as integer micro-degrees: `real_degrees * COORDINATE_PRECISION`.
pub const COORDINATE_PRECISION: i64 = 1_000_000;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Precision used by the Google polyline algorithm, independent of
/// [`COORDINATE_PRECISION`] (the wire format has always used 1e5).
pub const POLYLINE_PRECISION: f64 = 1e5;
