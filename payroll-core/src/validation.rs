//! Field validation for the salary form.
//!
//! [`validate`] checks all six fields on every pass; there is no
//! short-circuit, so one submit surfaces every problem at once. Each
//! failure is field-scoped and carries a fixed, user-facing message — the
//! caller can highlight exactly the inputs that failed. A pass that finds
//! no problems yields a [`ValidatedInput`], which is the only way one is
//! ever constructed.
//!
//! Unparsable numeric input and empty numeric input are the same error
//! class; there is no distinct "parse error" surfaced to the user.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::models::{FALLBACK_MAX_DAYS, FormInput, Month, ValidatedInput};

/// Identifies one of the six form fields, pairing an error with the input
/// it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EmployeeName,
    Month,
    PerDaySalary,
    OvertimeRate,
    DaysWorked,
    OvertimeHours,
}

impl Field {
    /// The six fields in form order.
    pub const ALL: [Field; 6] = [
        Self::EmployeeName,
        Self::Month,
        Self::PerDaySalary,
        Self::OvertimeRate,
        Self::DaysWorked,
        Self::OvertimeHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeName => "employee_name",
            Self::Month => "month",
            Self::PerDaySalary => "per_day_salary",
            Self::OvertimeRate => "overtime_rate",
            Self::DaysWorked => "days_worked",
            Self::OvertimeHours => "overtime_hours",
        }
    }
}

/// A single field-scoped validation failure.
///
/// The `Display` text is the exact message shown next to the field; these
/// strings are part of the form's contract and are asserted in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Employee name empty after trimming surrounding whitespace.
    #[error("Employee name is required")]
    EmployeeNameRequired,

    /// Month selector empty or not one of the twelve known keys.
    #[error("Please select a month")]
    MonthNotSelected,

    /// Per-day salary empty or not a number.
    #[error("Please enter a valid salary")]
    PerDaySalaryInvalid,

    /// Per-day salary parsed but is zero or negative.
    #[error("Salary must be greater than 0")]
    PerDaySalaryNotPositive,

    /// Overtime rate empty or not a number.
    #[error("Please enter a valid overtime salary")]
    OvertimeRateInvalid,

    /// Overtime rate parsed but is negative.
    #[error("Overtime salary cannot be negative")]
    OvertimeRateNegative,

    /// Days worked empty or not a number.
    #[error("Please enter number of days worked")]
    DaysWorkedInvalid,

    /// Days worked parsed but is negative.
    #[error("Days worked cannot be negative")]
    DaysWorkedNegative,

    /// Days worked exceeds the day cap for the selected month.
    #[error("Cannot exceed {max_days} days for {month_label}")]
    DaysWorkedExceedsMonth {
        max_days: u8,
        month_label: &'static str,
    },

    /// Overtime hours empty or not a number.
    #[error("Please enter overtime hours")]
    OvertimeHoursInvalid,

    /// Overtime hours parsed but is negative.
    #[error("Overtime hours cannot be negative")]
    OvertimeHoursNegative,
}

impl ValidationError {
    /// The form field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::EmployeeNameRequired => Field::EmployeeName,
            Self::MonthNotSelected => Field::Month,
            Self::PerDaySalaryInvalid | Self::PerDaySalaryNotPositive => Field::PerDaySalary,
            Self::OvertimeRateInvalid | Self::OvertimeRateNegative => Field::OvertimeRate,
            Self::DaysWorkedInvalid
            | Self::DaysWorkedNegative
            | Self::DaysWorkedExceedsMonth { .. } => Field::DaysWorked,
            Self::OvertimeHoursInvalid | Self::OvertimeHoursNegative => Field::OvertimeHours,
        }
    }
}

/// Outcome of one exhaustive validation pass: at most one error per field,
/// in form order.
///
/// The report lives only for the duration of one submit; nothing is cached
/// across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error recorded for `field`, if that field failed.
    pub fn error_for(
        &self,
        field: Field,
    ) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    fn push(
        &mut self,
        error: ValidationError,
    ) {
        debug!(field = error.field().as_str(), "rejected: {}", error);
        self.errors.push(error);
    }
}

/// Largest magnitude accepted in any amount field: one trillion.
///
/// Entries beyond it are rejected with the field's "invalid" message, and
/// the bound keeps every product the calculator forms well inside
/// `Decimal`'s range, so computation on a [`ValidatedInput`] cannot
/// overflow.
const AMOUNT_LIMIT: u64 = 1_000_000_000_000;

/// Strips comma thousands separators, but only when they sit in the
/// conventional 3-digit groups ("1,234,567.89"). Misplaced commas yield
/// `None`; a comma-free string passes through untouched.
fn strip_thousands_separators(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }
    let (int_part, fraction) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut groups = digits.split(',');
    let first = groups.next().unwrap_or("");
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut joined = String::with_capacity(digits.len());
    joined.push_str(sign);
    joined.push_str(first);
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        joined.push_str(group);
    }
    if let Some(f) = fraction {
        joined.push('.');
        joined.push_str(f);
    }
    Some(joined)
}

/// Parses a numeric form field.
///
/// Trims whitespace and accepts well-formed comma thousands separators
/// (users paste formatted amounts). Empty input, unparsable input,
/// misplaced commas, and magnitudes beyond [`AMOUNT_LIMIT`] all yield
/// `None`, matching the single "missing or invalid" error class per field.
fn parse_amount(s: &str) -> Option<Decimal> {
    let Some(normalized) = strip_thousands_separators(s.trim()) else {
        debug!(input = %s, "misplaced thousands separator");
        return None;
    };
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(value) if value.abs() > Decimal::from(AMOUNT_LIMIT) => {
            debug!(input = %s, "amount magnitude beyond {}", AMOUNT_LIMIT);
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            debug!(input = %s, "unparsable amount: {}", e);
            None
        }
    }
}

/// Validates a raw form snapshot.
///
/// All six fields are checked independently; the result is `Ok` only when
/// every field passes, and the `Err` report lists one error per failing
/// field in form order.
///
/// The days-worked bound comes from the selected month's day cap. When the
/// month itself is unset (already an error of its own) the bound falls back
/// to 31 so the days field still gets a sensible check. Every amount field
/// also rejects magnitudes beyond [`AMOUNT_LIMIT`], under the same message
/// as unparsable input.
///
/// # Example
///
/// ```
/// use payroll_core::models::FormInput;
/// use payroll_core::validation::{Field, validate};
///
/// let input = FormInput {
///     employee_name: "Asha Rao".into(),
///     month: "april".into(),
///     per_day_salary: "1000".into(),
///     overtime_rate: "100".into(),
///     days_worked: "31".into(),
///     overtime_hours: "0".into(),
/// };
///
/// let report = validate(&input).unwrap_err();
/// let error = report.error_for(Field::DaysWorked).unwrap();
/// assert_eq!(error.to_string(), "Cannot exceed 30 days for April");
/// ```
pub fn validate(input: &FormInput) -> Result<ValidatedInput, ValidationReport> {
    let mut report = ValidationReport::default();

    let employee_name = input.employee_name.trim();
    if employee_name.is_empty() {
        report.push(ValidationError::EmployeeNameRequired);
    }

    let month = Month::parse(input.month.trim());
    if month.is_none() {
        report.push(ValidationError::MonthNotSelected);
    }

    let per_day_salary = match parse_amount(&input.per_day_salary) {
        None => {
            report.push(ValidationError::PerDaySalaryInvalid);
            None
        }
        Some(value) if value <= Decimal::ZERO => {
            report.push(ValidationError::PerDaySalaryNotPositive);
            None
        }
        Some(value) => Some(value),
    };

    let overtime_rate = match parse_amount(&input.overtime_rate) {
        None => {
            report.push(ValidationError::OvertimeRateInvalid);
            None
        }
        Some(value) if value < Decimal::ZERO => {
            report.push(ValidationError::OvertimeRateNegative);
            None
        }
        Some(value) => Some(value),
    };

    let max_days = month.map_or(FALLBACK_MAX_DAYS, |m| m.max_days());
    let days_worked = match parse_amount(&input.days_worked) {
        None => {
            report.push(ValidationError::DaysWorkedInvalid);
            None
        }
        Some(value) if value < Decimal::ZERO => {
            report.push(ValidationError::DaysWorkedNegative);
            None
        }
        Some(value) if value > Decimal::from(max_days) => {
            report.push(ValidationError::DaysWorkedExceedsMonth {
                max_days,
                // Exceeding 31 with no month selected is reachable; the
                // month field carries its own error in that case.
                month_label: month.map_or("the selected month", |m| m.label()),
            });
            None
        }
        Some(value) => Some(value),
    };

    let overtime_hours = match parse_amount(&input.overtime_hours) {
        None => {
            report.push(ValidationError::OvertimeHoursInvalid);
            None
        }
        Some(value) if value < Decimal::ZERO => {
            report.push(ValidationError::OvertimeHoursNegative);
            None
        }
        Some(value) => Some(value),
    };

    match (month, per_day_salary, overtime_rate, days_worked, overtime_hours) {
        (Some(month), Some(salary), Some(rate), Some(days), Some(hours))
            if report.is_valid() =>
        {
            Ok(ValidatedInput::new(
                employee_name.to_string(),
                month,
                salary,
                rate,
                days,
                hours,
            ))
        }
        _ => Err(report),
    }
}
