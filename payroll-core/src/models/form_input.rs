use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Month;

/// Raw form values exactly as the user typed them.
///
/// Nothing here is parsed or trimmed; the snapshot is read fresh from the
/// form on every submit and handed to [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub employee_name: String,
    /// Selector value: one of the twelve month keys, or empty when nothing
    /// has been picked yet.
    pub month: String,
    pub per_day_salary: String,
    pub overtime_rate: String,
    pub days_worked: String,
    pub overtime_hours: String,
}

/// Typed product of a fully successful validation pass.
///
/// Only [`crate::validation::validate`] constructs one, so holding a
/// `ValidatedInput` means every field already satisfies its rule: the name
/// is trimmed and non-empty, the month is a real key, the salary is
/// positive, the rates and hours are non-negative, and days worked fits the
/// month's day cap. The calculator relies on that and has no error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    employee_name: String,
    month: Month,
    per_day_salary: Decimal,
    overtime_rate: Decimal,
    days_worked: Decimal,
    overtime_hours: Decimal,
}

impl ValidatedInput {
    pub(crate) fn new(
        employee_name: String,
        month: Month,
        per_day_salary: Decimal,
        overtime_rate: Decimal,
        days_worked: Decimal,
        overtime_hours: Decimal,
    ) -> Self {
        Self {
            employee_name,
            month,
            per_day_salary,
            overtime_rate,
            days_worked,
            overtime_hours,
        }
    }

    /// Trimmed, non-empty employee name.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Per-day salary, strictly positive.
    pub fn per_day_salary(&self) -> Decimal {
        self.per_day_salary
    }

    /// Overtime rate per hour, non-negative.
    pub fn overtime_rate(&self) -> Decimal {
        self.overtime_rate
    }

    /// Days worked, within `[0, month.max_days()]`.
    pub fn days_worked(&self) -> Decimal {
        self.days_worked
    }

    /// Overtime hours, non-negative.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_hours
    }
}
