//! Payroll computation for the salary form.
//!
//! Calculation runs only on input that has already passed validation, so
//! these modules are pure arithmetic and string assembly with no failure
//! modes.

pub mod common;
pub mod payroll;

pub use payroll::{PayrollBreakdown, PayrollStatement, compute, compute_statement};
