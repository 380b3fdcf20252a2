//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for converting between gross and
//! net salaries and for computing payroll sheets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, GrossFromNetRequest, NetFromGrossRequest, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollResponse};
pub use state::AppState;
