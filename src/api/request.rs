//! Request types for the payroll API.
//!
//! Every request may carry its own `config`; without one the server's
//! configuration is used. Amounts may be sent as JSON strings or numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SolverStrategy;
use crate::config::TaxConfiguration;
use crate::models::PayrollEntry;

/// Request body for `POST /net-from-gross`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetFromGrossRequest {
    /// Gross monthly salary.
    pub gross: Decimal,
    /// Optional configuration overriding the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TaxConfiguration>,
}

/// Request body for `POST /gross-from-net`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrossFromNetRequest {
    /// Target net monthly salary.
    pub net: Decimal,
    /// Optional configuration overriding the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TaxConfiguration>,
    /// Search strategy; damped Newton when omitted.
    #[serde(default)]
    pub strategy: SolverStrategy,
}

/// Employee line in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Display name of the employee.
    pub name: String,
    /// Net monthly salary.
    pub net_salary: Decimal,
}

impl From<EmployeeRequest> for PayrollEntry {
    fn from(req: EmployeeRequest) -> Self {
        PayrollEntry {
            name: req.name,
            net_salary: req.net_salary,
        }
    }
}

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Employees on the sheet, in display order.
    pub employees: Vec<EmployeeRequest>,
    /// Optional configuration overriding the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TaxConfiguration>,
    /// Search strategy; damped Newton when omitted.
    #[serde(default)]
    pub strategy: SolverStrategy,
}
