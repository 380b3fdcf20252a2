//! Core data models for the payroll engine.
//!
//! This module contains the result structures returned by the calculators
//! and the payroll sheet types built on top of them.

mod payroll;
mod salary_result;

pub use payroll::{PayrollEntry, PayrollRow, PayrollSheet, PayrollTotals};
pub use salary_result::{DeductionsBreakdown, EmployerCostsBreakdown, SalaryCalculationResult};
