//! Business rules for the employee salary form: the fixed month table,
//! per-field validation, payroll arithmetic, and rupee formatting.
//!
//! The flow mirrors the form's event model: a submit snapshot
//! ([`FormInput`]) goes through [`validation::validate`]; on success the
//! resulting [`models::ValidatedInput`] feeds
//! [`calculations::compute_statement`], which yields the display strings
//! for the result card. Everything is synchronous and stateless; nothing
//! is cached between passes.

pub mod calculations;
pub mod currency;
pub mod models;
pub mod validation;

pub use calculations::{PayrollBreakdown, PayrollStatement, compute, compute_statement};
pub use currency::format_inr;
pub use models::{FormInput, Month, ValidatedInput};
pub use validation::{Field, ValidationError, ValidationReport, validate};
