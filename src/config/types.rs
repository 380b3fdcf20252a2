//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed tax configuration structures.
//! They are plain values: the caller builds or deserializes one and passes it
//! explicitly to every calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Social-security (SGK) contribution rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SgkRates {
    /// Share withheld from the employee's gross salary.
    pub employee_rate: Decimal,
    /// Share paid by the employer before any incentive.
    pub employer_rate: Decimal,
    /// Incentive points subtracted from the employer share.
    pub employer_incentive_rate: Decimal,
}

/// Unemployment insurance rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentRates {
    /// Share withheld from the employee's gross salary.
    pub employee_rate: Decimal,
    /// Share paid by the employer.
    pub employer_rate: Decimal,
}

/// Stamp duty configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampDutyConfig {
    /// Stamp duty rate applied to the gross salary.
    pub rate: Decimal,
}

/// A single marginal income-tax bracket.
///
/// Covers the half-open range `[min_income, max_income)`. A `max_income` of
/// `None` means the bracket is unbounded above.
///
/// # Example
///
/// ```
/// use bordro_engine::config::IncomeTaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = IncomeTaxBracket {
///     id: "bracket-1".to_string(),
///     min_income: Decimal::ZERO,
///     max_income: Some(Decimal::from(190_000)),
///     rate: Decimal::new(15, 2),
/// };
/// assert!(!bracket.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    /// Opaque identifier used by consumers to correlate rows.
    pub id: String,
    /// Lower bound of the bracket (inclusive).
    pub min_income: Decimal,
    /// Upper bound of the bracket (exclusive), or `None` if unbounded.
    #[serde(default)]
    pub max_income: Option<Decimal>,
    /// Marginal rate applied to income inside the bracket.
    pub rate: Decimal,
}

impl IncomeTaxBracket {
    /// Returns true if the bracket has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }
}

/// Income tax configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// The marginal brackets. Order is not significant.
    pub brackets: Vec<IncomeTaxBracket>,
}

/// Statutory minimum wage figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageConfig {
    /// Legal minimum gross salary; drives the tax and stamp duty exemption.
    pub gross: Decimal,
    /// Published minimum net salary.
    pub net: Decimal,
}

/// The complete set of statutory parameters for one tax year.
///
/// The engine re-reads every value on each call and keeps nothing between
/// calls. Use [`TaxConfiguration::reference_2026`] for the published 2026
/// figures or deserialize one with [`ConfigLoader`](super::ConfigLoader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// Social-security rates.
    pub sgk: SgkRates,
    /// Unemployment insurance rates.
    pub unemployment: UnemploymentRates,
    /// Stamp duty rate.
    pub stamp_duty: StampDutyConfig,
    /// Progressive income tax brackets.
    pub income_tax: IncomeTaxConfig,
    /// Minimum wage figures.
    pub minimum_wage: MinimumWageConfig,
    /// Maximum monthly base subject to SGK and unemployment contributions.
    pub sgk_ceiling: Decimal,
}
