//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a salary calculation or a configuration
//! load.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The first six variants are raised by the calculation operations at the
/// point a precondition is violated. The configuration variants come from
/// loading and validating a [`TaxConfiguration`](crate::config::TaxConfiguration)
/// and are never produced by the calculators themselves.
///
/// # Example
///
/// ```
/// use bordro_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidGross { gross: Decimal::ZERO };
/// assert_eq!(error.to_string(), "Gross salary must be positive, got 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A deduction was requested on a negative base amount.
    #[error("Amount cannot be negative, got {amount}")]
    InvalidAmount {
        /// The offending base amount.
        amount: Decimal,
    },

    /// A rate outside the closed interval [0, 1] was supplied.
    #[error("Rate must be between 0 and 1, got {rate}")]
    InvalidRate {
        /// The offending rate.
        rate: Decimal,
    },

    /// The forward calculator was given a gross salary that is not positive.
    #[error("Gross salary must be positive, got {gross}")]
    InvalidGross {
        /// The offending gross salary.
        gross: Decimal,
    },

    /// The solver was given a target net salary that is not positive.
    #[error("Net salary must be positive, got {net}")]
    InvalidNet {
        /// The offending net salary.
        net: Decimal,
    },

    /// The solver used its whole iteration budget without reaching the target.
    #[error(
        "No convergence for net salary {target_net} after {iterations} iterations; \
         the input is extreme or the configuration is invalid"
    )]
    ConvergenceFailure {
        /// The net salary the solver was aiming for.
        target_net: Decimal,
        /// The iteration budget that was exhausted.
        iterations: u32,
    },

    /// An amount is so large that the results of the calculation on it
    /// cannot be represented.
    #[error("Amount {amount} is too large to calculate")]
    AmountTooLarge {
        /// The offending amount.
        amount: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration parsed fine but breaks a structural rule.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
