//! Closed-form two-body formulas for circular orbits around the Sun.
//!
//! All functions are pure. A non-positive semi-major axis is outside their
//! domain and yields NaN or infinity rather than an error.

use std::f64::consts::PI;

use qtty::{Day, Days, Meters, Seconds};

use crate::bodies::MetersPerSecond;
use crate::constants::{PhysicalConstants, SOLAR_SYSTEM};

/// Orbital period from Kepler's third law, `T = 2π·√(a³ / GM)`.
pub fn orbital_period_with(constants: &PhysicalConstants, semi_major_axis: Meters) -> Days {
    let a = semi_major_axis.value();
    let seconds = Seconds::new(2.0 * PI * (a.powi(3) / constants.gm()).sqrt());
    seconds.to::<Day>()
}

/// Circular orbital speed, `v = √(GM / r)`.
pub fn circular_velocity_with(constants: &PhysicalConstants, semi_major_axis: Meters) -> MetersPerSecond {
    MetersPerSecond::new((constants.gm() / semi_major_axis.value()).sqrt())
}

/// Orbital period of a body at `semi_major_axis` around the Sun.
pub fn orbital_period(semi_major_axis: Meters) -> Days {
    orbital_period_with(&SOLAR_SYSTEM, semi_major_axis)
}

/// Circular orbital speed of a body at `semi_major_axis` around the Sun.
pub fn circular_velocity(semi_major_axis: Meters) -> MetersPerSecond {
    circular_velocity_with(&SOLAR_SYSTEM, semi_major_axis)
}

/// Orbital period in days for a semi-major axis given in metres.
///
/// # Example
/// ```
/// use orbit_verify::orbit::orbital_period_days;
/// let days = orbital_period_days(149_597_870_700.0);
/// assert!((days - 365.26).abs() < 0.5);
/// ```
pub fn orbital_period_days(semi_major_axis_m: f64) -> f64 {
    orbital_period(Meters::new(semi_major_axis_m)).value()
}

/// Circular orbital speed in m/s for a semi-major axis given in metres.
pub fn circular_velocity_ms(semi_major_axis_m: f64) -> f64 {
    circular_velocity(Meters::new(semi_major_axis_m)).value()
}

/// Relative deviation of `calculated` from `reference`, in percent.
///
/// `reference` must be non-zero.
pub fn percent_error(calculated: f64, reference: f64) -> f64 {
    (calculated - reference).abs() / reference * 100.0
}
