//! Payroll sheet models.
//!
//! A payroll sheet is a list of employees, each entered by net salary, with
//! the computed breakdown per row and column totals underneath.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryCalculationResult;

/// An employee entered on a payroll sheet by net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Display name of the employee.
    pub name: String,
    /// The net salary the employee should receive.
    pub net_salary: Decimal,
}

/// One employee line of a payroll sheet.
///
/// A row whose calculation failed keeps its input and the error message so
/// the sheet can still be shown; it contributes nothing to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// Display name of the employee.
    pub name: String,
    /// The net salary that was entered.
    pub net_salary: Decimal,
    /// The computed breakdown, if the calculation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SalaryCalculationResult>,
    /// Why the calculation failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Column totals of a payroll sheet.
///
/// # Example
///
/// ```
/// use bordro_engine::models::PayrollTotals;
///
/// let totals = PayrollTotals::from_rows(&[]);
/// assert_eq!(totals, PayrollTotals::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of entered net salaries.
    pub net_salary: Decimal,
    /// Sum of gross salaries.
    pub gross: Decimal,
    /// Sum of employee SGK contributions.
    pub sgk_employee: Decimal,
    /// Sum of employee unemployment contributions.
    pub unemployment_employee: Decimal,
    /// Sum of income tax.
    pub income_tax: Decimal,
    /// Sum of stamp duty.
    pub stamp_duty: Decimal,
    /// Sum of employee deductions.
    pub total_deductions: Decimal,
    /// Sum of employer SGK contributions after incentive.
    pub sgk_employer: Decimal,
    /// Sum of SGK incentives.
    pub sgk_incentive: Decimal,
    /// Sum of employer unemployment contributions.
    pub unemployment_employer: Decimal,
    /// Sum of employer contributions.
    pub employer_total: Decimal,
    /// Sum of total employer cost.
    pub total_cost: Decimal,
}

/// A computed payroll sheet: one row per entry plus column totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSheet {
    /// Rows in entry order.
    pub rows: Vec<PayrollRow>,
    /// Totals over the rows that computed.
    pub totals: PayrollTotals,
}

impl PayrollTotals {
    /// Sums every row that has a result. Failed rows are skipped entirely,
    /// including their entered net salary.
    pub fn from_rows(rows: &[PayrollRow]) -> Self {
        rows.iter()
            .filter_map(|row| row.result.as_ref().map(|result| (row.net_salary, result)))
            .fold(Self::default(), |mut acc, (net_salary, result)| {
                acc.net_salary += net_salary;
                acc.gross += result.gross;
                acc.sgk_employee += result.deductions.sgk_employee;
                acc.unemployment_employee += result.deductions.unemployment_employee;
                acc.income_tax += result.deductions.income_tax;
                acc.stamp_duty += result.deductions.stamp_duty;
                acc.total_deductions += result.deductions.total;
                acc.sgk_employer += result.employer_costs.sgk_employer;
                acc.sgk_incentive += result.employer_costs.sgk_incentive;
                acc.unemployment_employer += result.employer_costs.unemployment_employer;
                acc.employer_total += result.employer_costs.total;
                acc.total_cost += result.total_cost;
                acc
            })
    }
}
