//! Solar ecliptic longitude, distance, and angular size.
//!
//! Two longitude models share this module:
//!
//! - **approximate**: days since the 2010.0 epoch drive a mean anomaly,
//!   corrected by a first-order equation of center (~0.01° class);
//! - **precise**: the classical multi-term series — Kepler's equation
//!   solved for the true anomaly plus planetary and lunar perturbation
//!   terms (arcsecond class).
//!
//! Sources: Duffett-Smith, _Practical Astronomy with your Calculator_,
//! §46-48; Meeus, _Astronomical Formulae for Calculators_, ch. 18.
//! Public domain algorithms.

use std::f64::consts::PI;

use surya_frames::normalize_360;
use surya_time::centuries_since_1900;

use crate::elements::{OrbitalElements, EPOCH_2010_JD};

/// Mean tropical year, in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_191;

/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Solar angular diameter at 1 AU, degrees.
const ANGULAR_DIAMETER_1AU_DEG: f64 = 0.533_128;

/// Convergence threshold for the Kepler iteration, radians.
const KEPLER_TOLERANCE_RAD: f64 = 1e-6;

/// Newton iteration converges in a handful of steps at solar
/// eccentricity; the cap keeps the call bounded regardless of input.
const KEPLER_MAX_ITERATIONS: u32 = 16;

/// Mean anomaly of the approximate model, degrees [0, 360).
///
/// M = N + L₂₀₁₀ − ϖ₂₀₁₀ where N = 360°·D/365.242191 and D is the
/// day count from the 2010.0 epoch. Reduced even when the intermediate
/// sum is far outside [0, 360).
pub fn approximate_mean_anomaly_deg(jd: f64) -> f64 {
    let epoch = OrbitalElements::at(EPOCH_2010_JD);
    let days = jd - EPOCH_2010_JD;
    let n = normalize_360(360.0 * days / TROPICAL_YEAR_DAYS);
    normalize_360(n + epoch.mean_longitude_deg - epoch.perihelion_longitude_deg)
}

/// True ecliptic longitude of the Sun, approximate model, degrees
/// [0, 360).
///
/// λ = N + Ec + L₂₀₁₀ with the first-order equation of center
/// Ec = (360/π)·e·sin M.
pub fn approximate_longitude_deg(jd: f64) -> f64 {
    let epoch = OrbitalElements::at(EPOCH_2010_JD);
    let days = jd - EPOCH_2010_JD;
    let n = normalize_360(360.0 * days / TROPICAL_YEAR_DAYS);
    let mean_anomaly =
        normalize_360(n + epoch.mean_longitude_deg - epoch.perihelion_longitude_deg);
    let equation_of_center =
        360.0 / PI * epoch.eccentricity * mean_anomaly.to_radians().sin();
    normalize_360(n + equation_of_center + epoch.mean_longitude_deg)
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration.
///
/// Returns the eccentric anomaly in radians. Iteration stops when the
/// residual drops below [`KEPLER_TOLERANCE_RAD`] or after
/// [`KEPLER_MAX_ITERATIONS`] steps.
fn eccentric_anomaly_rad(mean_anomaly_rad: f64, ecc: f64) -> f64 {
    let mut ea = mean_anomaly_rad;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = ea - ecc * ea.sin() - mean_anomaly_rad;
        if residual.abs() < KEPLER_TOLERANCE_RAD {
            break;
        }
        ea -= residual / (1.0 - ecc * ea.cos());
    }
    ea
}

/// True anomaly from the eccentric anomaly:
/// tan(ν/2) = √((1+e)/(1−e))·tan(E/2).
fn true_anomaly_rad(eccentric_anomaly: f64, ecc: f64) -> f64 {
    2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * (eccentric_anomaly / 2.0).tan()).atan()
}

/// Precise solar state: true ecliptic longitude (degrees, [0, 360))
/// and radius vector (AU).
fn precise_sun(jd: f64) -> (f64, f64) {
    let t = centuries_since_1900(jd);
    let t2 = t * t;

    // Mean longitude and mean anomaly, modular-product polynomials.
    let a = 100.002_135_9 * t;
    let mean_longitude = 279.696_68 + 0.000_302_5 * t2 + 360.0 * (a - a.floor());
    let a = 99.997_360_42 * t;
    let mean_anomaly = 358.475_83 - (0.000_15 + 0.000_003_3 * t) * t2 + 360.0 * (a - a.floor());
    let ecc = 0.016_751_04 - 0.000_041_8 * t - 0.000_000_126 * t2;

    let ma_rad = normalize_360(mean_anomaly).to_radians();
    let ea = eccentric_anomaly_rad(ma_rad, ecc);
    let nu = true_anomaly_rad(ea, ecc);

    // Perturbation arguments (degrees): Venus, Jupiter, Moon, and the
    // long-period term.
    let arg_a = (153.23 + 22_518.754_1 * t).to_radians();
    let arg_b = (216.57 + 45_037.508_2 * t).to_radians();
    let arg_c = (312.69 + 32_964.357_7 * t).to_radians();
    let arg_d = (350.74 + 445_267.114_2 * t - 0.001_44 * t2).to_radians();
    let arg_e = (231.19 + 20.20 * t).to_radians();
    let arg_h = (353.40 + 65_928.715_5 * t).to_radians();

    let delta_lon = 0.001_34 * arg_a.cos()
        + 0.001_54 * arg_b.cos()
        + 0.002_00 * arg_c.cos()
        + 0.001_79 * arg_d.sin()
        + 0.001_78 * arg_e.sin();
    let delta_radius = 0.000_005_43 * arg_a.sin()
        + 0.000_015_75 * arg_b.sin()
        + 0.000_016_27 * arg_c.sin()
        + 0.000_030_76 * arg_d.cos()
        + 0.000_009_27 * arg_h.sin();

    // The mean-longitude and mean-anomaly reductions cancel modulo 360
    // in the difference; the final reduction absorbs any mismatch.
    let longitude =
        normalize_360(nu.to_degrees() + mean_longitude - mean_anomaly + delta_lon);
    let radius_au = 1.000_000_2 * (1.0 - ecc * ea.cos()) + delta_radius;

    (longitude, radius_au)
}

/// True ecliptic longitude of the Sun, precise series, degrees
/// [0, 360).
pub fn precise_longitude_deg(jd: f64) -> f64 {
    precise_sun(jd).0
}

/// Earth-Sun distance in astronomical units.
pub fn distance_au(jd: f64) -> f64 {
    precise_sun(jd).1
}

/// Earth-Sun distance in kilometres.
pub fn distance_km(jd: f64) -> f64 {
    distance_au(jd) * AU_KM
}

/// Apparent angular diameter of the solar disc, degrees.
pub fn angular_diameter_deg(jd: f64) -> f64 {
    ANGULAR_DIAMETER_1AU_DEG / distance_au(jd)
}
