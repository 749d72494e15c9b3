//! The planet table checked by the verifier.
//!
//! Each [`CelestialBody`] mirrors the parameters the solar system simulation
//! ships with. Orbits are treated as circular, so `orbit_radius` doubles as
//! the semi-major axis.

use qtty::velocity::Velocity;
use qtty::{AstronomicalUnit, AstronomicalUnits, Degrees, Kilograms, Kilometers, Meter, Meters, Second};
use serde::Serialize;

/// Orbital speed in metres per second.
pub type MetersPerSecond = Velocity<Meter, Second>;

/// Physical and orbital parameters of a single body orbiting the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Semi-major axis of the (assumed circular) orbit
    pub orbit_radius: Meters,
    /// Reference orbital speed the simulation uses
    pub orbital_velocity: MetersPerSecond,
    pub expected_period_days: u32,
    pub inclination: Degrees,
    /// Equatorial radius of the body itself
    pub radius: Meters,
    pub mass: Kilograms,
}

impl CelestialBody {
    /// Orbit radius expressed in astronomical units.
    pub fn orbit_au(&self) -> AstronomicalUnits {
        self.orbit_radius.to::<AstronomicalUnit>()
    }

    /// Body radius expressed in kilometres.
    pub fn radius_km(&self) -> Kilometers {
        self.radius.to()
    }
}

macro_rules! body {
    ($name:literal, $orbit:expr, $velocity:expr, $period:expr, $incl:expr, $radius:expr, $mass:expr) => {
        CelestialBody {
            name: $name,
            orbit_radius: Meters::new($orbit),
            orbital_velocity: MetersPerSecond::new($velocity),
            expected_period_days: $period,
            inclination: Degrees::new($incl),
            radius: Meters::new($radius),
            mass: Kilograms::new($mass),
        }
    };
}

/// The eight planets, innermost first.
pub const PLANETS: [CelestialBody; 8] = [
    body!("Mercury", 57_909_050_000.0, 47_362.0, 88, 7.005, 2_439_700.0, 3.3011e23),
    body!("Venus", 108_208_000_000.0, 35_020.0, 225, 3.395, 6_051_800.0, 4.8675e24),
    body!("Earth", 149_597_870_700.0, 29_780.0, 365, 0.0, 6_371_000.0, 5.972e24),
    body!("Mars", 227_939_200_000.0, 24_077.0, 687, 1.850, 3_389_500.0, 6.4171e23),
    body!("Jupiter", 778.57e9, 13_070.0, 4_333, 1.303, 69_911_000.0, 1.8982e27),
    body!("Saturn", 1433.53e9, 9_680.0, 10_759, 2.485, 58_232_000.0, 5.6834e26),
    body!("Uranus", 2872.46e9, 6_800.0, 30_687, 0.773, 25_362_000.0, 8.6810e25),
    body!("Neptune", 4495.06e9, 5_430.0, 60_190, 1.770, 24_622_000.0, 1.02413e26),
];

/// Published mean distances in AU, kept as an independent reference.
///
/// These are printed next to the computed `orbit_radius / AU` value and are
/// never compared against it numerically.
pub const EXPECTED_AU: [(&str, f64); 8] = [
    ("Mercury", 0.387),
    ("Venus", 0.723),
    ("Earth", 1.000),
    ("Mars", 1.524),
    ("Jupiter", 5.204),
    ("Saturn", 9.583),
    ("Uranus", 19.19),
    ("Neptune", 30.07),
];

/// Look up the reference distance for `name`, or `0.0` when the body is not listed.
pub fn expected_au(name: &str) -> f64 {
    EXPECTED_AU
        .iter()
        .find(|(body, _)| *body == name)
        .map(|(_, au)| *au)
        .unwrap_or(0.0)
}

/// Find a planet in the built-in table by name.
pub fn find_planet(name: &str) -> Option<&'static CelestialBody> {
    PLANETS.iter().find(|body| body.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_planet_names_are_unique() {
        let names: HashSet<_> = PLANETS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PLANETS.len());
    }

    #[test]
    fn test_planets_ordered_by_distance() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbit_radius.value() < pair[1].orbit_radius.value());
        }
    }

    #[test]
    fn test_every_planet_has_reference_distance() {
        for planet in PLANETS.iter() {
            assert!(expected_au(planet.name) > 0.0, "{} missing", planet.name);
        }
    }

    #[test]
    fn test_unknown_body_reference_is_zero() {
        assert_eq!(expected_au("Pluto"), 0.0);
    }

    #[test]
    fn test_earth_orbit_is_one_au() {
        let earth = find_planet("Earth").unwrap();
        assert!((earth.orbit_au().value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_in_km() {
        let jupiter = find_planet("Jupiter").unwrap();
        assert!((jupiter.radius_km().value() - 69_911.0).abs() < 1e-9);
    }
}
