//! Tax configuration for the payroll engine.
//!
//! This module provides the [`TaxConfiguration`] value that every calculation
//! takes explicitly, the 2026 reference figures, structural validation, and
//! a YAML loader.
//!
//! # Example
//!
//! ```no_run
//! use bordro_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tr_2026.yaml").unwrap().into_config();
//! println!("Minimum gross wage: {}", config.minimum_wage.gross);
//! ```

mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::ConfigLoader;
pub use types::{
    IncomeTaxBracket, IncomeTaxConfig, MinimumWageConfig, SgkRates, StampDutyConfig,
    TaxConfiguration, UnemploymentRates,
};
