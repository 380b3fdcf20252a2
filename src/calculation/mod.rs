//! Calculation logic for the payroll engine.
//!
//! Components, leaf first:
//! - [`deduction`] and [`capped_deduction`]: percentage deductions, optionally
//!   capped at the SGK ceiling.
//! - [`income_tax`]: progressive tax over marginal brackets.
//! - [`net_from_gross`]: the full breakdown for a gross salary.
//! - [`gross_from_net`]: the iterative inverse.
//! - [`calculate_payroll`]: a sheet of employees entered by net salary.
//!
//! All of them are pure functions of their arguments and safe to run in
//! parallel.

mod deduction;
mod gross_from_net;
mod income_tax;
mod net_from_gross;
mod payroll;
mod rounding;

pub use deduction::{capped_deduction, deduction};
pub use gross_from_net::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, MAX_TARGET_NET, SolverOptions, SolverStrategy,
    gross_from_net, gross_from_net_with,
};
pub use income_tax::income_tax;
pub use net_from_gross::net_from_gross;
pub use payroll::calculate_payroll;
pub use rounding::round2;
