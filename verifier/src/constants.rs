//! Physical constants shared by every orbit computation.
//!
//! These are the values the simulation's planet table was tuned against.
//! Changing any of them shifts every percent error in the report.

use qtty::{Kilograms, Meters, Seconds};
use serde::Serialize;

/// Gravitational constant `G` in m³/kg/s².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Solar mass `M☉`.
pub const SOLAR_MASS: Kilograms = Kilograms::new(1.989e30);

/// Astronomical unit (mean Earth–Sun distance).
pub const ASTRONOMICAL_UNIT: Meters = Meters::new(149_597_870_700.0);

/// Length of a mean solar day.
pub const SECONDS_PER_DAY: Seconds = Seconds::new(86_400.0);

/// The constants of a central-body system, grouped for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,
    pub central_mass: Kilograms,
    pub astronomical_unit: Meters,
}

impl PhysicalConstants {
    /// Standard gravitational parameter `μ = G·M` in m³/s².
    pub fn gm(&self) -> f64 {
        self.gravitational_constant * self.central_mass.value()
    }
}

/// The Sun-centred constants used by the verifier.
pub const SOLAR_SYSTEM: PhysicalConstants = PhysicalConstants {
    gravitational_constant: GRAVITATIONAL_CONSTANT,
    central_mass: SOLAR_MASS,
    astronomical_unit: ASTRONOMICAL_UNIT,
};
