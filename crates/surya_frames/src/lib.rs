//! Coordinate transforms and angle formatting for solar position work.
//!
//! Provides the ecliptic → equatorial rotation (with the time-dependent
//! mean obliquity it needs), angle normalization, and sexagesimal
//! decomposition of decimal hours/degrees for display.

pub mod angle;
pub mod equatorial;
pub mod obliquity;
pub mod sexagesimal;

pub use angle::{normalize_24, normalize_360};
pub use equatorial::{ecliptic_to_equatorial, EquatorialCoords};
pub use obliquity::mean_obliquity_deg;
pub use sexagesimal::{
    decimal_degrees_to_dms, decimal_hours_to_hms, dms_to_decimal_degrees, hms_to_decimal_hours,
    Dms, Hms,
};
