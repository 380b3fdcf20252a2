//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TaxConfiguration;

/// Loads and validates a tax configuration.
///
/// # File Format
///
/// A single YAML document mirroring [`TaxConfiguration`]:
/// ```text
/// sgk:
///   employee_rate: "0.14"
///   employer_rate: "0.205"
///   employer_incentive_rate: "0.05"
/// unemployment: { employee_rate: "0.01", employer_rate: "0.02" }
/// stamp_duty: { rate: "0.00759" }
/// income_tax:
///   brackets:
///     - { id: bracket-1, min_income: "0", max_income: "190000", rate: "0.15" }
///     - { id: bracket-2, min_income: "190000", rate: "0.20" }
/// minimum_wage: { gross: "33030.00", net: "28075.50" }
/// sgk_ceiling: "297270.00"
/// ```
///
/// Amounts are quoted so they parse as exact decimals. A bracket without
/// `max_income` is unbounded.
///
/// # Example
///
/// ```no_run
/// use bordro_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tr_2026.yaml")?;
/// println!("SGK ceiling: {}", loader.config().sgk_ceiling);
/// # Ok::<(), bordro_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The values break a structural rule (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from YAML text already held in memory.
    ///
    /// Errors are reported against the pseudo-path `<inline>`.
    ///
    /// # Example
    ///
    /// ```
    /// use bordro_engine::config::{ConfigLoader, TaxConfiguration};
    ///
    /// let yaml = serde_yaml::to_string(&TaxConfiguration::reference_2026()).unwrap();
    /// let loader = ConfigLoader::from_yaml_str(&yaml).unwrap();
    /// assert_eq!(loader.config(), &TaxConfiguration::reference_2026());
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        let config: TaxConfiguration =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TaxConfiguration {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> TaxConfiguration {
        self.config
    }
}
