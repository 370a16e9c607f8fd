//! Apparent position of the Sun.
//!
//! The pipeline runs strictly forward: local civil time → Greenwich
//! date and Universal Time → Julian Date → solar ecliptic longitude
//! (approximate or precise model) → equatorial coordinates via the
//! obliquity rotation → sexagesimal output. Every stage is a pure
//! function; nothing is cached and no state is shared.
//!
//! Two public operations form the surface:
//! [`approximate_position_of_sun`] and [`precise_position_of_sun`].

pub mod elements;
pub mod sun;

pub use elements::{
    eccentricity, mean_longitude_deg, perihelion_longitude_deg, OrbitalElements, EPOCH_2010_JD,
};
pub use sun::{
    angular_diameter_deg, approximate_longitude_deg, approximate_mean_anomaly_deg, distance_au,
    distance_km, precise_longitude_deg, AU_KM, TROPICAL_YEAR_DAYS,
};

pub use surya_time::{LocalTime, TimeZone};

use surya_frames::{
    decimal_degrees_to_dms, decimal_hours_to_hms, ecliptic_to_equatorial, mean_obliquity_deg,
    Dms, Hms,
};
use surya_time::local_to_greenwich;

/// Equatorial position of the Sun for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Right ascension in decimal hours, [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

impl SunPosition {
    /// Right ascension as an hours-minutes-seconds triple.
    pub fn ra_hms(&self) -> Hms {
        decimal_hours_to_hms(self.ra_hours)
    }

    /// Declination as a degrees-minutes-seconds triple, signed on the
    /// degree component.
    pub fn dec_dms(&self) -> Dms {
        decimal_degrees_to_dms(self.dec_deg)
    }
}

impl std::fmt::Display for SunPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RA {}  Dec {}", self.ra_hms(), self.dec_dms())
    }
}

/// Rotate a solar ecliptic longitude into RA/Dec at the same epoch.
///
/// The Sun's ecliptic latitude is negligible and taken as zero.
fn position_from_longitude(longitude_deg: f64, jd: f64) -> SunPosition {
    let eq = ecliptic_to_equatorial(longitude_deg, 0.0, mean_obliquity_deg(jd));
    SunPosition {
        ra_hours: eq.ra_hours,
        dec_deg: eq.dec_deg,
    }
}

/// Apparent position of the Sun, approximate model (~0.01° class).
///
/// `local` is wall-clock civil time; `zone` carries the zone
/// correction and daylight-saving offset applied on the way to
/// Universal Time.
pub fn approximate_position_of_sun(local: &LocalTime, zone: &TimeZone) -> SunPosition {
    let greenwich = local_to_greenwich(local, zone);
    let jd = greenwich.julian_date();
    position_from_longitude(sun::approximate_longitude_deg(jd), jd)
}

/// Apparent position of the Sun, precise series (arcsecond class).
///
/// Same signature and pipeline as [`approximate_position_of_sun`];
/// only the longitude model differs.
pub fn precise_position_of_sun(local: &LocalTime, zone: &TimeZone) -> SunPosition {
    let greenwich = local_to_greenwich(local, zone);
    let jd = greenwich.julian_date();
    position_from_longitude(sun::precise_longitude_deg(jd), jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display_format() {
        let pos = SunPosition {
            ra_hours: 8.392_703,
            dec_deg: 19.353_981,
        };
        let s = pos.to_string();
        assert!(s.starts_with("RA 08h 23m"), "got: {s}");
        assert!(s.contains("+19° 21′"), "got: {s}");
    }

    #[test]
    fn sexagesimal_accessors_match_decimal() {
        let pos = SunPosition {
            ra_hours: 6.638,
            dec_deg: -23.147,
        };
        let ra = pos.ra_hms();
        let dec = pos.dec_dms();
        assert_eq!(ra.hours, 6);
        assert_eq!(dec.degrees, -23);
        assert!(
            (surya_frames::hms_to_decimal_hours(&ra) - pos.ra_hours).abs() < 1e-6
        );
        assert!(
            (surya_frames::dms_to_decimal_degrees(&dec) - pos.dec_deg).abs() < 1e-6
        );
    }

    #[test]
    fn zone_shift_is_equivalent_to_ut_shift() {
        // 14:00 in zone +2 names the same instant as 12:00 UT.
        let zoned = approximate_position_of_sun(
            &LocalTime::new(2003, 7, 27, 14, 0, 0.0),
            &TimeZone::new(2, 0),
        );
        let utc = approximate_position_of_sun(
            &LocalTime::new(2003, 7, 27, 12, 0, 0.0),
            &TimeZone::utc(),
        );
        assert!((zoned.ra_hours - utc.ra_hours).abs() < 1e-12);
        assert!((zoned.dec_deg - utc.dec_deg).abs() < 1e-12);
    }
}
