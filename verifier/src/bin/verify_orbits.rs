//! Orbital mechanics verification CLI
//!
//! Prints the verification report for the built-in planet table and exits
//! with status 0 when every period and velocity check is within tolerance,
//! 1 otherwise.
//!
//! # Usage
//!
//! ```bash
//! verify-orbits                      # text report
//! verify-orbits --json               # JSON report
//! verify-orbits --config verify.toml # custom tolerance
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Diagnostic log level on stderr (default: warn)

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use orbit_verify::{Verifier, VerifierConfig};

const USAGE: &str = "Usage: verify-orbits [--json] [--config <path>]";

/// Exit status for invalid command-line usage
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Default)]
struct Args {
    json: bool,
    config: Option<PathBuf>,
    help: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            other => bail!("unrecognized argument: {}", other),
        }
    }
    Ok(parsed)
}

fn main() -> Result<ExitCode> {
    // Initialize logging; stdout is reserved for the report
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };
    if args.help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &args.config {
        Some(path) => VerifierConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => VerifierConfig::default(),
    };
    tracing::debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    let mut verifier = Verifier::new(stdout.lock()).with_config(config);
    let code = if args.json {
        verifier.write_json().context("writing JSON report")?
    } else {
        verifier.run().context("writing report")?
    };

    Ok(ExitCode::from(code as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_no_arguments() {
        let parsed = parse_args(args(&[])).unwrap();
        assert!(!parsed.json);
        assert!(parsed.config.is_none());
    }

    #[test]
    fn test_json_and_config() {
        let parsed = parse_args(args(&["--json", "--config", "verify.toml"])).unwrap();
        assert!(parsed.json);
        assert_eq!(parsed.config, Some(PathBuf::from("verify.toml")));
    }

    #[test]
    fn test_config_without_path() {
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }
}
