//! Verifier configuration file support.
//!
//! Configuration is optional. Without a file the verifier runs with
//! [`VerifierConfig::default`], which is the 2% tolerance the planet table is
//! published against.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{VerifyError, VerifyResult};

/// Verifier configuration from file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub verification: VerificationSettings,
}

/// Settings that influence classification and rendering of check rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationSettings {
    /// A row passes when its percent error is strictly below this value
    #[serde(default = "default_tolerance_percent")]
    pub tolerance_percent: f64,
    /// Prefix statuses with `✓` / `✗`
    #[serde(default = "default_symbols")]
    pub symbols: bool,
}

fn default_tolerance_percent() -> f64 {
    2.0
}

fn default_symbols() -> bool {
    true
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            tolerance_percent: default_tolerance_percent(),
            symbols: default_symbols(),
        }
    }
}

impl VerifierConfig {
    /// Load verifier configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(VerifierConfig)` if the file was read, parsed and validated
    /// * `Err(VerifyError::Config)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> VerifyResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            VerifyError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> VerifyResult<Self> {
        let config: VerifierConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a usable tolerance.
    pub fn validate(&self) -> VerifyResult<()> {
        let tolerance = self.verification.tolerance_percent;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(VerifyError::Config(format!(
                "tolerance_percent must be a positive number, got {}",
                tolerance
            )));
        }
        Ok(())
    }

    /// Tolerance in percent below which a check row passes.
    pub fn tolerance_percent(&self) -> f64 {
        self.verification.tolerance_percent
    }
}
