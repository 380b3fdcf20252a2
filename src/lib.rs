//! Payroll engine for Turkish salaries
//!
//! This crate converts between gross and net monthly salaries under a
//! configurable tax regime (SGK and unemployment contributions, progressive
//! income tax, stamp duty and minimum-wage exemptions) and reports the
//! employer's cost alongside.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
