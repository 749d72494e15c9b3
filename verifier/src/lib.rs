//! Orbital parameter verification for the solar system simulation.
//!
//! Recomputes each planet's orbital period (Kepler's third law) and circular
//! orbital speed from its orbit radius, compares them with the values the
//! simulation ships with, and renders a fixed-width pass/fail report.
//!
//! ```
//! use orbit_verify::report::{Verifier, EXIT_SUCCESS};
//!
//! let mut verifier = Verifier::new(Vec::new());
//! assert_eq!(verifier.run().unwrap(), EXIT_SUCCESS);
//! ```

pub mod bodies;
pub mod checks;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod orbit;
pub mod report;

pub use bodies::{CelestialBody, PLANETS};
pub use checks::{CheckKind, CheckResult, CheckStatus};
pub use config::VerifierConfig;
pub use error::{VerifyError, VerifyResult};
pub use report::{VerificationReport, Verifier};
