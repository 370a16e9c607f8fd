//! Angle normalization helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Uses a floor-based reduction so negative inputs land in range and
/// exact multiples of 360 reduce to 0, not 360.
pub fn normalize_360(deg: f64) -> f64 {
    deg - 360.0 * (deg / 360.0).floor()
}

/// Normalize a value on the hour circle to [0, 24) hours.
pub fn normalize_24(hours: f64) -> f64 {
    hours - 24.0 * (hours / 24.0).floor()
}
