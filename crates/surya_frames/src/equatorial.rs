//! Ecliptic → equatorial coordinate rotation.

use crate::angle::normalize_24;

/// Equatorial coordinates of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in decimal hours, range [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

/// Rotate ecliptic longitude/latitude into right ascension and
/// declination.
///
/// RA = atan2(sin λ · cos ε − tan β · sin ε, cos λ), converted to
/// hours and reduced to [0h, 24h); Dec = asin(sin β · cos ε +
/// cos β · sin ε · sin λ).
///
/// The asin argument is clamped to [-1, 1]: for |β| near 90° the
/// intermediate sum can drift a few ulps outside the domain.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let y = lon.sin() * eps.cos() - lat.tan() * eps.sin();
    let x = lon.cos();
    let ra_hours = normalize_24(y.atan2(x).to_degrees() / 15.0);

    let sin_dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).clamp(-1.0, 1.0);

    EquatorialCoords {
        ra_hours,
        dec_deg: sin_dec.asin().to_degrees(),
    }
}
