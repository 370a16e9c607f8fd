//! Mean obliquity of the ecliptic.
//!
//! The angle between Earth's equatorial and orbital planes decreases
//! slowly (~47″ per century). The rotation into equatorial coordinates
//! must therefore evaluate it at the target epoch rather than using a
//! fixed constant.
//!
//! Source: Duffett-Smith, _Practical Astronomy with your Calculator_,
//! §27. Public domain algorithm.

/// Julian Date of 1900 January 0.5, the polynomial's base epoch.
const EPOCH_1900_JD: f64 = 2_415_020.0;

/// Mean obliquity of the ecliptic at a given Julian Date, in degrees.
///
/// ε = 23.43929167° − Δ/3600 where
/// Δ = c·(46.815 + c·(0.0006 − c·0.00181)) arcseconds and
/// c = Julian centuries from 1900.0, rebased to 2000.0.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let c = (jd - EPOCH_1900_JD) / 36_525.0 - 1.0;
    let delta_arcsec = c * (46.815 + c * (0.0006 - c * 0.00181));
    23.439_291_67 - delta_arcsec / 3600.0
}
