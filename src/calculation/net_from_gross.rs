//! Gross-to-net salary calculation.
//!
//! Applies the employee deductions, the minimum-wage exemption and the
//! employer contributions to a gross monthly salary.

use rust_decimal::Decimal;

use crate::config::TaxConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionsBreakdown, EmployerCostsBreakdown, SalaryCalculationResult};

use super::{capped_deduction, deduction, income_tax, round2};

/// Taxable income of a salary: gross minus the employee SGK and
/// unemployment contributions.
struct EmployeeContributions {
    sgk: Decimal,
    unemployment: Decimal,
    taxable_income: Decimal,
}

fn employee_contributions(
    gross: Decimal,
    config: &TaxConfiguration,
) -> EngineResult<EmployeeContributions> {
    let sgk = capped_deduction(gross, config.sgk.employee_rate, config.sgk_ceiling)?;
    let unemployment = capped_deduction(
        gross,
        config.unemployment.employee_rate,
        config.sgk_ceiling,
    )?;

    Ok(EmployeeContributions {
        sgk,
        unemployment,
        taxable_income: gross - sgk - unemployment,
    })
}

/// Calculates the full salary breakdown for a gross monthly salary.
///
/// # Steps
///
/// 1. Employee SGK and unemployment contributions, capped at the SGK ceiling.
/// 2. Taxable income = gross minus those contributions.
/// 3. The minimum-wage exemption: the income tax a minimum gross wage would
///    owe, computed the same way. It is subtracted from the tax, not from the
///    taxable income, and never drives the tax below zero.
/// 4. Stamp duty on the full gross, less the stamp duty on the minimum gross
///    wage, floored at zero.
/// 5. Employer SGK (less the incentive) and unemployment contributions,
///    capped at the SGK ceiling.
///
/// Every field of the result is rounded to two decimals. The function is
/// pure: identical inputs give identical outputs.
///
/// # Errors
///
/// - [`EngineError::InvalidGross`] if `gross` is zero or negative.
/// - [`EngineError::AmountTooLarge`] if the total cost would overflow.
/// - [`EngineError::InvalidRate`] / [`EngineError::InvalidAmount`] if a
///   configured rate or the ceiling is out of range.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::net_from_gross;
/// use bordro_engine::config::TaxConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = TaxConfiguration::reference_2026();
/// let result = net_from_gross(config.minimum_wage.gross, &config).unwrap();
///
/// assert_eq!(result.net, config.minimum_wage.net);
/// assert_eq!(result.deductions.income_tax, Decimal::ZERO);
/// ```
pub fn net_from_gross(
    gross: Decimal,
    config: &TaxConfiguration,
) -> EngineResult<SalaryCalculationResult> {
    if gross <= Decimal::ZERO {
        return Err(EngineError::InvalidGross { gross });
    }

    let brackets = &config.income_tax.brackets;
    let employee = employee_contributions(gross, config)?;

    let minimum_wage = employee_contributions(config.minimum_wage.gross, config)?;
    let minimum_wage_tax_exemption = income_tax(minimum_wage.taxable_income, brackets);

    let income_tax_before_exemption = income_tax(employee.taxable_income, brackets);
    let income_tax_due =
        (income_tax_before_exemption - minimum_wage_tax_exemption).max(Decimal::ZERO);

    let stamp_duty_before_exemption = deduction(gross, config.stamp_duty.rate)?;
    let minimum_wage_stamp_duty_exemption =
        deduction(config.minimum_wage.gross, config.stamp_duty.rate)?;
    let stamp_duty =
        (stamp_duty_before_exemption - minimum_wage_stamp_duty_exemption).max(Decimal::ZERO);

    let total_deductions = employee.sgk + employee.unemployment + income_tax_due + stamp_duty;

    let sgk_employer_before_incentive =
        capped_deduction(gross, config.sgk.employer_rate, config.sgk_ceiling)?;
    let sgk_incentive = capped_deduction(
        gross,
        config.sgk.employer_incentive_rate,
        config.sgk_ceiling,
    )?;
    let sgk_employer = sgk_employer_before_incentive - sgk_incentive;
    let unemployment_employer = capped_deduction(
        gross,
        config.unemployment.employer_rate,
        config.sgk_ceiling,
    )?;
    let employer_total = sgk_employer + unemployment_employer;

    // Components are already whole kuruş, so rounding gross first keeps
    // net and total cost exact.
    let gross = round2(gross);
    let total_deductions = round2(total_deductions);
    let employer_total = round2(employer_total);
    let total_cost = gross
        .checked_add(employer_total)
        .ok_or(EngineError::AmountTooLarge { amount: gross })?;

    Ok(SalaryCalculationResult {
        gross,
        net: gross - total_deductions,
        deductions: DeductionsBreakdown {
            sgk_employee: round2(employee.sgk),
            unemployment_employee: round2(employee.unemployment),
            income_tax_base: round2(employee.taxable_income),
            income_tax: round2(income_tax_due),
            stamp_duty: round2(stamp_duty),
            minimum_wage_tax_exemption: round2(minimum_wage_tax_exemption),
            minimum_wage_stamp_duty_exemption: round2(minimum_wage_stamp_duty_exemption),
            total: total_deductions,
        },
        employer_costs: EmployerCostsBreakdown {
            sgk_employer: round2(sgk_employer),
            sgk_incentive: round2(sgk_incentive),
            unemployment_employer: round2(unemployment_employer),
            total: employer_total,
        },
        total_cost,
    })
}
