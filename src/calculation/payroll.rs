//! Payroll sheet calculation.
//!
//! Runs the net-to-gross search for every employee on a sheet. A failing
//! row is kept with its error so the rest of the sheet still computes.

use crate::config::TaxConfiguration;
use crate::models::{PayrollEntry, PayrollRow, PayrollSheet, PayrollTotals};

use super::{SolverOptions, gross_from_net_with};

/// Computes a payroll sheet from employees entered by net salary.
///
/// Rows come back in entry order. Rows whose calculation fails carry the
/// error message instead of a result and are left out of the totals.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{SolverOptions, calculate_payroll};
/// use bordro_engine::config::TaxConfiguration;
/// use bordro_engine::models::PayrollEntry;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     PayrollEntry { name: "Ayşe".to_string(), net_salary: Decimal::from(40_000) },
///     PayrollEntry { name: "Mehmet".to_string(), net_salary: Decimal::ZERO },
/// ];
/// let sheet = calculate_payroll(
///     &entries,
///     &TaxConfiguration::reference_2026(),
///     &SolverOptions::default(),
/// );
///
/// assert!(sheet.rows[0].result.is_some());
/// assert!(sheet.rows[1].error.is_some());
/// assert_eq!(sheet.totals.net_salary, Decimal::from(40_000));
/// ```
pub fn calculate_payroll(
    entries: &[PayrollEntry],
    config: &TaxConfiguration,
    options: &SolverOptions,
) -> PayrollSheet {
    let rows: Vec<PayrollRow> = entries
        .iter()
        .map(|entry| {
            let (result, error) = match gross_from_net_with(entry.net_salary, config, options) {
                Ok(result) => (Some(result), None),
                Err(err) => (None, Some(err.to_string())),
            };
            PayrollRow {
                name: entry.name.clone(),
                net_salary: entry.net_salary,
                result,
                error,
            }
        })
        .collect();

    let totals = PayrollTotals::from_rows(&rows);
    PayrollSheet { rows, totals }
}
