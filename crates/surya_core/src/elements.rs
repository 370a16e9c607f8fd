//! Epoch-dependent orbital elements of the Sun.
//!
//! The three elements driving the approximate longitude model — mean
//! ecliptic longitude, longitude of perihelion, and eccentricity — are
//! polynomials in time. The approximate model anchors them at the 2010.0
//! reference epoch, but the general formulas stay available: they are not
//! epoch-invariant and other epochs remain valid arguments.
//!
//! Source: Duffett-Smith, _Practical Astronomy with your Calculator_,
//! §46 and the solar-longitude polynomials of Meeus, _Astronomical
//! Formulae for Calculators_, ch. 18. Public domain.

use surya_frames::normalize_360;
use surya_time::centuries_since_1900;

/// Julian Date of the 2010.0 reference epoch: 2010 January 0.0
/// (2009 December 31, 0h UT).
pub const EPOCH_2010_JD: f64 = 2_455_196.5;

/// Orbital elements of the Sun at a given epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Epoch the elements refer to, as a Julian Date.
    pub epoch_jd: f64,
    /// Mean ecliptic longitude at epoch, degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Longitude of perihelion at epoch, degrees [0, 360).
    pub perihelion_longitude_deg: f64,
    /// Orbital eccentricity at epoch.
    pub eccentricity: f64,
}

impl OrbitalElements {
    /// Evaluate the element polynomials at an arbitrary epoch.
    pub fn at(jd: f64) -> Self {
        Self {
            epoch_jd: jd,
            mean_longitude_deg: mean_longitude_deg(jd),
            perihelion_longitude_deg: perihelion_longitude_deg(jd),
            eccentricity: eccentricity(jd),
        }
    }
}

/// Mean ecliptic longitude of the Sun, degrees [0, 360).
///
/// L = 279.69668 + 0.0003025·t² + 360·frac(100.0021359·t), with t in
/// Julian centuries from 1900 January 0.5. The modular-product form
/// keeps the fast-moving term accurate far from the base epoch.
pub fn mean_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_1900(jd);
    let a = 100.002_135_9 * t;
    normalize_360(279.696_68 + 0.000_302_5 * t * t + 360.0 * (a - a.floor()))
}

/// Longitude of perihelion of the Sun's orbit, degrees [0, 360).
pub fn perihelion_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_1900(jd);
    normalize_360(281.220_844_4 + 1.719_175 * t + 0.000_452_778 * t * t)
}

/// Eccentricity of the Sun's orbit.
pub fn eccentricity(jd: f64) -> f64 {
    let t = centuries_since_1900(jd);
    0.016_751_04 - 0.000_041_8 * t - 0.000_000_126 * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values_at_2010_epoch() {
        // Duffett-Smith §46, epoch 2010.0 table:
        // εg = 279.557208°, ϖg = 283.112438°, e = 0.016705
        let el = OrbitalElements::at(EPOCH_2010_JD);
        assert!(
            (el.mean_longitude_deg - 279.557_208).abs() < 0.001,
            "L = {}",
            el.mean_longitude_deg
        );
        assert!(
            (el.perihelion_longitude_deg - 283.112_438).abs() < 0.0005,
            "ϖ = {}",
            el.perihelion_longitude_deg
        );
        assert!(
            (el.eccentricity - 0.016_705).abs() < 0.000_01,
            "e = {}",
            el.eccentricity
        );
    }

    #[test]
    fn elements_in_range() {
        for &jd in &[2_415_020.0, 2_451_545.0, 2_455_196.5, 2_469_807.5] {
            let el = OrbitalElements::at(jd);
            assert!((0.0..360.0).contains(&el.mean_longitude_deg));
            assert!((0.0..360.0).contains(&el.perihelion_longitude_deg));
            assert!(el.eccentricity > 0.016 && el.eccentricity < 0.018);
        }
    }

    #[test]
    fn perihelion_advances_slowly() {
        // ~1.72°/century
        let p0 = perihelion_longitude_deg(2_415_020.0);
        let p1 = perihelion_longitude_deg(2_415_020.0 + 36_525.0);
        assert!((p1 - p0 - 1.719_6).abs() < 0.001, "Δϖ = {}", p1 - p0);
    }

    #[test]
    fn eccentricity_decreasing() {
        let e0 = eccentricity(2_415_020.0);
        let e1 = eccentricity(2_455_196.5);
        assert!(e0 > e1);
    }
}
