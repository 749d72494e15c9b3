//! Report driver.
//!
//! [`Verifier`] renders the fixed-width text report section by section into any
//! [`Write`] sink, and can build the same results as a serializable
//! [`VerificationReport`].
//!
//! Section order for a full run:
//! 1. Title banner and physical constants
//! 2. Orbital periods (pass/fail)
//! 3. Orbital velocities (pass/fail)
//! 4. Orbit distances in AU (informational)
//! 5. Planet summary (informational)
//! 6. Overall result banner

use std::io::Write;

use serde::Serialize;

use crate::bodies::{expected_au, CelestialBody, PLANETS};
use crate::checks::{all_passed, check_periods, check_velocities, CheckResult};
use crate::config::VerifierConfig;
use crate::constants::{PhysicalConstants, SOLAR_SYSTEM};
use crate::error::VerifyResult;
use crate::format::{banner, grouped, rule, sci, sci_shortest};

/// Process exit code when every period and velocity check passed
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code when at least one period or velocity check failed
pub const EXIT_FAILURE: i32 = 1;

/// One row of the distance section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub body: &'static str,
    pub radius_m: f64,
    pub au: f64,
    /// Independent reference value, not checked against `au`
    pub expected_au: f64,
}

/// One row of the summary section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub body: &'static str,
    pub radius_km: f64,
    pub mass_kg: f64,
    pub orbit_au: f64,
    pub inclination_deg: f64,
}

/// Machine-readable form of a full verification run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub constants: PhysicalConstants,
    pub tolerance_percent: f64,
    pub periods: Vec<CheckResult>,
    pub velocities: Vec<CheckResult>,
    pub distances: Vec<DistanceRow>,
    pub summary: Vec<SummaryRow>,
    pub passed: bool,
}

impl VerificationReport {
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

pub fn distance_rows(bodies: &[CelestialBody]) -> Vec<DistanceRow> {
    bodies
        .iter()
        .map(|body| DistanceRow {
            body: body.name,
            radius_m: body.orbit_radius.value(),
            au: body.orbit_au().value(),
            expected_au: expected_au(body.name),
        })
        .collect()
}

pub fn summary_rows(bodies: &[CelestialBody]) -> Vec<SummaryRow> {
    bodies
        .iter()
        .map(|body| SummaryRow {
            body: body.name,
            radius_km: body.radius_km().value(),
            mass_kg: body.mass.value(),
            orbit_au: body.orbit_au().value(),
            inclination_deg: body.inclination.value(),
        })
        .collect()
}

/// Renders verification sections for a table of bodies into a sink.
pub struct Verifier<'a, W: Write> {
    bodies: &'a [CelestialBody],
    config: VerifierConfig,
    out: W,
}

impl<W: Write> Verifier<'static, W> {
    /// Verifier over the built-in planet table with default settings.
    pub fn new(out: W) -> Self {
        Verifier::with_bodies(&PLANETS, VerifierConfig::default(), out)
    }
}

impl<'a, W: Write> Verifier<'a, W> {
    pub fn with_bodies(bodies: &'a [CelestialBody], config: VerifierConfig, out: W) -> Self {
        Self { bodies, config, out }
    }

    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Give back the sink, e.g. to inspect a captured `Vec<u8>`.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, title: &str) -> VerifyResult<()> {
        log::info!("{}", title);
        writeln!(self.out)?;
        writeln!(self.out, "{}", banner())?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", banner())?;
        Ok(())
    }

    /// Print the title banner and the physical constants in use.
    pub fn print_constants(&mut self) -> VerifyResult<()> {
        let constants = SOLAR_SYSTEM;
        writeln!(self.out, "{}", banner())?;
        writeln!(self.out, "ORBITAL MECHANICS VERIFICATION FOR SOLAR SYSTEM SIMULATION")?;
        writeln!(self.out, "{}", banner())?;
        writeln!(
            self.out,
            "Gravitational Constant G = {} m³/kg/s²",
            sci_shortest(constants.gravitational_constant)
        )?;
        writeln!(self.out, "Solar Mass M☉ = {} kg", sci(constants.central_mass.value(), 3))?;
        writeln!(
            self.out,
            "Astronomical Unit = {} m",
            grouped(constants.astronomical_unit.value(), 0)
        )?;
        Ok(())
    }

    /// Check every body's Kepler period. Returns true iff all rows pass.
    pub fn verify_periods(&mut self) -> VerifyResult<bool> {
        self.section("ORBITAL PERIOD VERIFICATION (Kepler's Third Law: T = 2π√(a³/GM))")?;
        writeln!(
            self.out,
            "{:<10} | {:>12} | {:>12} | {:>8} | {:<6}",
            "Planet", "Calculated", "Expected", "Error", "Status"
        )?;
        writeln!(self.out, "{}", rule())?;

        let symbols = self.config.verification.symbols;
        let results = check_periods(self.bodies, self.config.tolerance_percent());
        for result in &results {
            writeln!(
                self.out,
                "{:<10} | {:>10.1} d | {:>10} d | {:>6.2} % | {}",
                result.body,
                result.calculated,
                result.reference,
                result.error_percent,
                result.status.label(symbols)
            )?;
        }
        Ok(all_passed(&results))
    }

    /// Check every body's circular orbital speed. Returns true iff all rows pass.
    pub fn verify_velocities(&mut self) -> VerifyResult<bool> {
        self.section("ORBITAL VELOCITY VERIFICATION (v = √(GM/r))")?;
        writeln!(
            self.out,
            "{:<10} | {:>12} | {:>12} | {:>8} | {:<6}",
            "Planet", "Calculated", "Config", "Error", "Status"
        )?;
        writeln!(self.out, "{}", rule())?;

        let symbols = self.config.verification.symbols;
        let results = check_velocities(self.bodies, self.config.tolerance_percent());
        for result in &results {
            writeln!(
                self.out,
                "{:<10} | {:>10.0} m/s | {:>10.0} m/s | {:>6.2} % | {}",
                result.body,
                result.calculated,
                result.reference,
                result.error_percent,
                result.status.label(symbols)
            )?;
        }
        Ok(all_passed(&results))
    }

    /// Print each orbit radius in metres and AU next to the reference AU table.
    pub fn report_distances(&mut self) -> VerifyResult<()> {
        self.section("ORBITAL DISTANCE VERIFICATION (in Astronomical Units)")?;
        writeln!(
            self.out,
            "{:<10} | {:>18} | {:>8} | {:>12}",
            "Planet", "Distance (m)", "AU", "Expected AU"
        )?;
        writeln!(self.out, "{}", rule())?;

        for row in distance_rows(self.bodies) {
            writeln!(
                self.out,
                "{:<10} | {:>18} | {:>8.3} | {:>12.3}",
                row.body,
                sci(row.radius_m, 2),
                row.au,
                row.expected_au
            )?;
        }
        Ok(())
    }

    /// Print radius, mass, orbit and inclination of every body.
    pub fn print_summary(&mut self) -> VerifyResult<()> {
        self.section("SOLAR SYSTEM SUMMARY")?;
        writeln!(
            self.out,
            "{:<10} | {:>12} | {:>12} | {:>10} | {:>9}",
            "Planet", "Radius (km)", "Mass (kg)", "Orbit (AU)", "Incl. (°)"
        )?;
        writeln!(self.out, "{}", rule())?;

        for row in summary_rows(self.bodies) {
            writeln!(
                self.out,
                "{:<10} | {:>12} | {:>12} | {:>10.3} | {:>9.3}",
                row.body,
                grouped(row.radius_km, 0),
                sci(row.mass_kg, 2),
                row.orbit_au,
                row.inclination_deg
            )?;
        }
        Ok(())
    }

    /// Render the full text report and return the process exit code.
    pub fn run(&mut self) -> VerifyResult<i32> {
        self.print_constants()?;

        let period_ok = self.verify_periods()?;
        let velocity_ok = self.verify_velocities()?;
        self.report_distances()?;
        self.print_summary()?;

        self.section("VERIFICATION RESULT")?;
        let tolerance = self.config.tolerance_percent();
        let code = if period_ok && velocity_ok {
            let mark = if self.config.verification.symbols { "✓ " } else { "" };
            writeln!(
                self.out,
                "{}All orbital parameters are within acceptable error margins (< {}%)",
                mark, tolerance
            )?;
            EXIT_SUCCESS
        } else {
            let mark = if self.config.verification.symbols { "✗ " } else { "" };
            writeln!(
                self.out,
                "{}Some orbital parameters have errors exceeding {}%",
                mark, tolerance
            )?;
            EXIT_FAILURE
        };
        self.out.flush()?;

        log::info!(
            "Verification finished: periods {}, velocities {}",
            if period_ok { "ok" } else { "failed" },
            if velocity_ok { "ok" } else { "failed" }
        );
        Ok(code)
    }

    /// Compute every section without rendering text.
    pub fn build_report(&self) -> VerificationReport {
        let tolerance = self.config.tolerance_percent();
        let periods = check_periods(self.bodies, tolerance);
        let velocities = check_velocities(self.bodies, tolerance);
        let passed = all_passed(&periods) && all_passed(&velocities);
        VerificationReport {
            constants: SOLAR_SYSTEM,
            tolerance_percent: tolerance,
            periods,
            velocities,
            distances: distance_rows(self.bodies),
            summary: summary_rows(self.bodies),
            passed,
        }
    }

    /// Write the report as pretty JSON and return the process exit code.
    pub fn write_json(&mut self) -> VerifyResult<i32> {
        let report = self.build_report();
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(report.exit_code())
    }
}
