//! Structural validation of a tax configuration.
//!
//! The calculators trust their configuration and only check the rates they
//! actually apply. Callers that accept configurations from users run
//! [`TaxConfiguration::validate`] first so bracket gaps and overlaps are
//! caught before they silently skew a result.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{IncomeTaxBracket, TaxConfiguration};

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(field, format!("rate {} is outside [0, 1]", rate)));
    }
    Ok(())
}

fn check_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(invalid(field, format!("must be positive, got {}", value)));
    }
    Ok(())
}

impl TaxConfiguration {
    /// Checks every structural rule of the configuration.
    ///
    /// # Rules
    ///
    /// - Every rate lies in [0, 1] and the SGK incentive does not exceed the
    ///   employer SGK rate.
    /// - Minimum wage gross and net are positive and net is below gross.
    /// - The SGK ceiling is positive.
    /// - Brackets are non-empty with unique ids, and once sorted by
    ///   `min_income` they partition [0, ∞): the first starts at zero, each
    ///   starts where the previous one ends, only the last is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first field that
    /// breaks a rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bordro_engine::config::TaxConfiguration;
    /// use rust_decimal::Decimal;
    ///
    /// let mut config = TaxConfiguration::reference_2026();
    /// assert!(config.validate().is_ok());
    ///
    /// config.sgk_ceiling = Decimal::ZERO;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        check_rate("sgk.employee_rate", self.sgk.employee_rate)?;
        check_rate("sgk.employer_rate", self.sgk.employer_rate)?;
        check_rate(
            "sgk.employer_incentive_rate",
            self.sgk.employer_incentive_rate,
        )?;
        if self.sgk.employer_incentive_rate > self.sgk.employer_rate {
            return Err(invalid(
                "sgk.employer_incentive_rate",
                "incentive exceeds the employer rate",
            ));
        }
        check_rate("unemployment.employee_rate", self.unemployment.employee_rate)?;
        check_rate("unemployment.employer_rate", self.unemployment.employer_rate)?;
        check_rate("stamp_duty.rate", self.stamp_duty.rate)?;

        check_positive("minimum_wage.gross", self.minimum_wage.gross)?;
        check_positive("minimum_wage.net", self.minimum_wage.net)?;
        if self.minimum_wage.net >= self.minimum_wage.gross {
            return Err(invalid(
                "minimum_wage.net",
                "net minimum wage must be below the gross minimum wage",
            ));
        }
        check_positive("sgk_ceiling", self.sgk_ceiling)?;

        validate_brackets(&self.income_tax.brackets)
    }
}

fn validate_brackets(brackets: &[IncomeTaxBracket]) -> EngineResult<()> {
    const FIELD: &str = "income_tax.brackets";

    if brackets.is_empty() {
        return Err(invalid(FIELD, "at least one bracket is required"));
    }

    let mut ids = HashSet::new();
    for bracket in brackets {
        if !ids.insert(bracket.id.as_str()) {
            return Err(invalid(FIELD, format!("duplicate bracket id '{}'", bracket.id)));
        }
        check_rate(FIELD, bracket.rate)?;
    }

    let mut sorted: Vec<&IncomeTaxBracket> = brackets.iter().collect();
    sorted.sort_by(|a, b| a.min_income.cmp(&b.min_income));

    if sorted[0].min_income != Decimal::ZERO {
        return Err(invalid(
            FIELD,
            format!("lowest bracket starts at {}, expected 0", sorted[0].min_income),
        ));
    }

    let last = sorted.len() - 1;
    for (index, bracket) in sorted.iter().enumerate() {
        match bracket.max_income {
            None if index != last => {
                return Err(invalid(
                    FIELD,
                    format!("bracket '{}' is unbounded but is not the highest", bracket.id),
                ));
            }
            None => {}
            Some(_) if index == last => {
                return Err(invalid(
                    FIELD,
                    format!("highest bracket '{}' must be unbounded", bracket.id),
                ));
            }
            Some(max) => {
                if max <= bracket.min_income {
                    return Err(invalid(
                        FIELD,
                        format!("bracket '{}' ends at or below its start", bracket.id),
                    ));
                }
                let next = sorted[index + 1];
                if next.min_income != max {
                    return Err(invalid(
                        FIELD,
                        format!(
                            "bracket '{}' ends at {} but '{}' starts at {}",
                            bracket.id, max, next.id, next.min_income
                        ),
                    ));
                }
            }
        }
    }

    Ok(())
}
