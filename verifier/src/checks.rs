//! Per-body verification checks.
//!
//! Each check recomputes one orbital quantity from the body's orbit radius and
//! compares it against the value the simulation is configured with. A check
//! produces a [`CheckResult`] whose status is decided by a strict
//! `error < tolerance` comparison.
//!
//! Checks:
//! - Period: Kepler's third law vs `expected_period_days`
//! - Velocity: circular orbital speed vs `orbital_velocity`

use serde::Serialize;

use crate::bodies::CelestialBody;
use crate::orbit::{circular_velocity, orbital_period, percent_error};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// Classify a percent error against a tolerance. Exactly `tolerance` fails.
    pub fn classify(error_percent: f64, tolerance_percent: f64) -> Self {
        if error_percent < tolerance_percent {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }

    /// Status text as printed in the report, optionally prefixed with a check mark.
    pub fn label(&self, symbols: bool) -> String {
        if !symbols {
            return self.as_str().to_string();
        }
        match self {
            CheckStatus::Pass => format!("✓ {}", self.as_str()),
            CheckStatus::Fail => format!("✗ {}", self.as_str()),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

/// Which quantity a check compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Period,
    Velocity,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Period => "period",
            CheckKind::Velocity => "velocity",
        }
    }

    /// Unit of `calculated` and `reference` for this kind of check.
    pub fn unit(&self) -> &'static str {
        match self {
            CheckKind::Period => "d",
            CheckKind::Velocity => "m/s",
        }
    }
}

/// Result of comparing one computed quantity for one body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub body: &'static str,
    pub kind: CheckKind,
    pub calculated: f64,
    pub reference: f64,
    pub error_percent: f64,
    pub status: CheckStatus,
}

impl CheckResult {
    fn new(
        body: &'static str,
        kind: CheckKind,
        calculated: f64,
        reference: f64,
        tolerance_percent: f64,
    ) -> Self {
        let error_percent = percent_error(calculated, reference);
        let status = CheckStatus::classify(error_percent, tolerance_percent);
        log::debug!(
            "{} {}: calculated {:.3} {}, reference {:.3} {}, error {:.4}%",
            body,
            kind.as_str(),
            calculated,
            kind.unit(),
            reference,
            kind.unit(),
            error_percent
        );
        if !status.is_pass() {
            log::warn!(
                "{} {} off by {:.2}% (tolerance {}%)",
                body,
                kind.as_str(),
                error_percent,
                tolerance_percent
            );
        }
        Self {
            body,
            kind,
            calculated,
            reference,
            error_percent,
            status,
        }
    }
}

/// Compare the Kepler period of `body` against its expected period
pub fn check_period(body: &CelestialBody, tolerance_percent: f64) -> CheckResult {
    let calculated = orbital_period(body.orbit_radius).value();
    CheckResult::new(
        body.name,
        CheckKind::Period,
        calculated,
        f64::from(body.expected_period_days),
        tolerance_percent,
    )
}

/// Compare the circular orbital speed of `body` against its configured speed
pub fn check_velocity(body: &CelestialBody, tolerance_percent: f64) -> CheckResult {
    let calculated = circular_velocity(body.orbit_radius).value();
    CheckResult::new(
        body.name,
        CheckKind::Velocity,
        calculated,
        body.orbital_velocity.value(),
        tolerance_percent,
    )
}

/// Run the period check over every body, preserving table order
pub fn check_periods(bodies: &[CelestialBody], tolerance_percent: f64) -> Vec<CheckResult> {
    bodies
        .iter()
        .map(|body| check_period(body, tolerance_percent))
        .collect()
}

/// Run the velocity check over every body, preserving table order
pub fn check_velocities(bodies: &[CelestialBody], tolerance_percent: f64) -> Vec<CheckResult> {
    bodies
        .iter()
        .map(|body| check_velocity(body, tolerance_percent))
        .collect()
}

/// True iff every result passed. An empty batch passes.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.status.is_pass())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{find_planet, PLANETS};

    #[test]
    fn test_classify_boundary_is_fail() {
        assert_eq!(CheckStatus::classify(2.0, 2.0), CheckStatus::Fail);
        assert_eq!(CheckStatus::classify(1.999_999, 2.0), CheckStatus::Pass);
        assert_eq!(CheckStatus::classify(2.000_001, 2.0), CheckStatus::Fail);
    }

    #[test]
    fn test_classify_nan_fails() {
        assert_eq!(CheckStatus::classify(f64::NAN, 2.0), CheckStatus::Fail);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CheckStatus::Pass.label(true), "✓ PASS");
        assert_eq!(CheckStatus::Fail.label(true), "✗ FAIL");
        assert_eq!(CheckStatus::Fail.label(false), "FAIL");
    }

    #[test]
    fn test_earth_period_check() {
        let earth = find_planet("Earth").unwrap();
        let result = check_period(earth, 2.0);
        assert_eq!(result.kind, CheckKind::Period);
        assert_eq!(result.reference, 365.0);
        assert!(result.error_percent < 2.0);
        assert!(result.status.is_pass());
    }

    #[test]
    fn test_all_planets_pass() {
        assert!(all_passed(&check_periods(&PLANETS, 2.0)));
        assert!(all_passed(&check_velocities(&PLANETS, 2.0)));
    }

    #[test]
    fn test_tight_tolerance_fails_mercury_velocity() {
        // Mercury's configured speed is ~1.1% below the circular value
        let mercury = find_planet("Mercury").unwrap();
        let result = check_velocity(mercury, 1.0);
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn test_results_keep_table_order() {
        let results = check_velocities(&PLANETS, 2.0);
        let names: Vec<_> = results.iter().map(|r| r.body).collect();
        let expected: Vec<_> = PLANETS.iter().map(|p| p.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_empty_batch_passes() {
        assert!(all_passed(&[]));
    }
}
