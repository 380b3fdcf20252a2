//! Salary calculation result models.
//!
//! This module contains the [`SalaryCalculationResult`] type and the two
//! breakdowns it carries. Every amount is rounded to two decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts withheld from the employee's gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    /// Employee SGK contribution.
    pub sgk_employee: Decimal,
    /// Employee unemployment insurance contribution.
    pub unemployment_employee: Decimal,
    /// Taxable income before the minimum-wage exemption is applied.
    pub income_tax_base: Decimal,
    /// Income tax after the minimum-wage exemption.
    pub income_tax: Decimal,
    /// Stamp duty after the minimum-wage exemption.
    pub stamp_duty: Decimal,
    /// Income tax a minimum-wage salary would owe; subtracted from `income_tax`.
    pub minimum_wage_tax_exemption: Decimal,
    /// Stamp duty a minimum-wage salary would owe; subtracted from `stamp_duty`.
    pub minimum_wage_stamp_duty_exemption: Decimal,
    /// Sum of the four withheld amounts.
    pub total: Decimal,
}

/// Contributions paid by the employer on top of the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCostsBreakdown {
    /// Employer SGK contribution after the incentive.
    pub sgk_employer: Decimal,
    /// Amount removed from the employer SGK contribution by the incentive.
    pub sgk_incentive: Decimal,
    /// Employer unemployment insurance contribution.
    pub unemployment_employer: Decimal,
    /// `sgk_employer + unemployment_employer`.
    pub total: Decimal,
}

/// The complete outcome of a gross-to-net or net-to-gross calculation.
///
/// # Invariants
///
/// - `net == gross - deductions.total`
/// - `total_cost == gross + employer_costs.total`
///
/// Results produced by the solver report the requested net exactly, so the
/// first invariant holds there to within one kuruş.
///
/// # Example
///
/// ```
/// use bordro_engine::calculation::net_from_gross;
/// use bordro_engine::config::TaxConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = TaxConfiguration::reference_2026();
/// let result = net_from_gross(Decimal::from(30_000), &config).unwrap();
///
/// assert_eq!(result.net, result.gross - result.deductions.total);
/// assert_eq!(result.total_cost, result.gross + result.employer_costs.total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculationResult {
    /// Gross salary.
    pub gross: Decimal,
    /// Net salary paid to the employee.
    pub net: Decimal,
    /// Employee-side deductions.
    pub deductions: DeductionsBreakdown,
    /// Employer-side contributions.
    pub employer_costs: EmployerCostsBreakdown,
    /// Gross salary plus employer contributions.
    pub total_cost: Decimal,
}
