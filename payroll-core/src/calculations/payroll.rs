//! Salary breakdown computation and display assembly.
//!
//! Everything here is pure: the input is a [`ValidatedInput`], so there is
//! no error path. Full decimal precision is kept through the arithmetic;
//! rounding happens only at currency formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::format_inr;
use crate::models::ValidatedInput;

/// The three pay figures, at full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// `per_day_salary × days_worked`.
    pub regular_pay: Decimal,
    /// `overtime_rate × overtime_hours`.
    pub overtime_pay: Decimal,
    /// `regular_pay + overtime_pay`.
    pub total_pay: Decimal,
}

/// The display strings rendered on the result card.
///
/// Money fields carry the final currency formatting; the labels carry the
/// wording shown above the figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// `"for {employee name}"`.
    pub display_name: String,
    /// `"Salary for {days} {day|days} in {month}"`, singular when exactly
    /// one day was worked.
    pub days_label: String,
    pub regular_pay: String,
    pub overtime_pay: String,
    pub total_pay: String,
}

/// Computes the pay breakdown for a validated input.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::compute;
/// use payroll_core::models::FormInput;
/// use payroll_core::validation::validate;
///
/// let input = validate(&FormInput {
///     employee_name: "Asha Rao".into(),
///     month: "february".into(),
///     per_day_salary: "1000".into(),
///     overtime_rate: "100".into(),
///     days_worked: "28".into(),
///     overtime_hours: "5".into(),
/// })
/// .unwrap();
///
/// let breakdown = compute(&input);
/// assert_eq!(breakdown.regular_pay, dec!(28000));
/// assert_eq!(breakdown.overtime_pay, dec!(500));
/// assert_eq!(breakdown.total_pay, dec!(28500));
/// ```
pub fn compute(input: &ValidatedInput) -> PayrollBreakdown {
    let regular_pay = input.per_day_salary() * input.days_worked();
    let overtime_pay = input.overtime_rate() * input.overtime_hours();
    let total_pay = regular_pay + overtime_pay;

    PayrollBreakdown {
        regular_pay,
        overtime_pay,
        total_pay,
    }
}

impl PayrollStatement {
    /// Assembles the display strings for an already-computed breakdown.
    pub fn from_breakdown(
        input: &ValidatedInput,
        breakdown: &PayrollBreakdown,
    ) -> Self {
        // normalize() drops trailing zeros so "28" renders, not "28.00",
        // while a fractional entry like 7.5 shows as typed.
        let days = input.days_worked().normalize();
        let unit = if days == Decimal::ONE { "day" } else { "days" };

        Self {
            display_name: format!("for {}", input.employee_name()),
            days_label: format!("Salary for {} {} in {}", days, unit, input.month().label()),
            regular_pay: format_inr(breakdown.regular_pay),
            overtime_pay: format_inr(breakdown.overtime_pay),
            total_pay: format_inr(breakdown.total_pay),
        }
    }
}

/// Computes and formats in one step: the result-card payload for a
/// successful submit.
///
/// # Example
///
/// ```
/// use payroll_core::calculations::compute_statement;
/// use payroll_core::models::FormInput;
/// use payroll_core::validation::validate;
///
/// let input = validate(&FormInput {
///     employee_name: "Asha Rao".into(),
///     month: "february".into(),
///     per_day_salary: "1000".into(),
///     overtime_rate: "100".into(),
///     days_worked: "28".into(),
///     overtime_hours: "5".into(),
/// })
/// .unwrap();
///
/// let statement = compute_statement(&input);
/// assert_eq!(statement.days_label, "Salary for 28 days in February");
/// assert_eq!(statement.total_pay, "₹28,500.00");
/// ```
pub fn compute_statement(input: &ValidatedInput) -> PayrollStatement {
    let breakdown = compute(input);
    debug!(
        employee = input.employee_name(),
        month = input.month().key(),
        total = %breakdown.total_pay,
        "computed payroll breakdown"
    );
    PayrollStatement::from_breakdown(input, &breakdown)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::FormInput;
    use crate::validation::validate;

    fn validated(
        month: &str,
        per_day_salary: &str,
        overtime_rate: &str,
        days_worked: &str,
        overtime_hours: &str,
    ) -> ValidatedInput {
        validate(&FormInput {
            employee_name: "Asha Rao".into(),
            month: month.into(),
            per_day_salary: per_day_salary.into(),
            overtime_rate: overtime_rate.into(),
            days_worked: days_worked.into(),
            overtime_hours: overtime_hours.into(),
        })
        .unwrap()
    }

    #[test]
    fn february_full_month_with_overtime() {
        let input = validated("february", "1000", "100", "28", "5");

        let statement = compute_statement(&input);

        assert_eq!(statement.display_name, "for Asha Rao");
        assert_eq!(statement.days_label, "Salary for 28 days in February");
        assert_eq!(statement.regular_pay, "₹28,000.00");
        assert_eq!(statement.overtime_pay, "₹500.00");
        assert_eq!(statement.total_pay, "₹28,500.00");
    }

    #[test]
    fn a_single_day_uses_the_singular_label() {
        let input = validated("march", "1500", "0", "1", "0");

        let statement = compute_statement(&input);

        assert_eq!(statement.days_label, "Salary for 1 day in March");
    }

    #[test]
    fn zero_days_uses_the_plural_label() {
        let input = validated("june", "800", "50", "0", "2");

        let statement = compute_statement(&input);

        assert_eq!(statement.days_label, "Salary for 0 days in June");
        assert_eq!(statement.regular_pay, "₹0.00");
        assert_eq!(statement.total_pay, "₹100.00");
    }

    #[test]
    fn fractional_days_render_as_entered() {
        let input = validated("july", "1000", "0", "7.5", "0");

        let statement = compute_statement(&input);

        assert_eq!(statement.days_label, "Salary for 7.5 days in July");
        assert_eq!(statement.regular_pay, "₹7,500.00");
    }

    #[test]
    fn breakdown_keeps_full_precision() {
        let input = validated("may", "333.33", "0", "3", "0");

        let breakdown = compute(&input);

        assert_eq!(breakdown.regular_pay, dec!(999.99));
        assert_eq!(breakdown.total_pay, dec!(999.99));
    }

    #[test]
    fn amounts_at_the_validation_limit_do_not_overflow() {
        // One trillion is the largest amount validation lets through; the
        // worst-case products must stay inside Decimal's range.
        let input = validated(
            "january",
            "1000000000000",
            "1000000000000",
            "31",
            "1000000000000",
        );

        let breakdown = compute(&input);

        assert_eq!(breakdown.regular_pay, dec!(31000000000000));
        assert_eq!(breakdown.overtime_pay, dec!(1000000000000000000000000));
        assert_eq!(
            breakdown.total_pay,
            dec!(1000000000031000000000000)
        );
    }

    #[test]
    fn compute_is_deterministic() {
        let input = validated("october", "1234.56", "78.9", "21", "3.5");

        let first = compute_statement(&input);
        let second = compute_statement(&input);

        assert_eq!(first, second);
    }
}
