//! Form state for the salary calculator.
//!
//! [`SalaryForm`] owns the six field buffers, the focus cursor, per-field
//! error slots, and the result card. Every mutation is synchronous; the
//! terminal loop feeds it key events and redraws from its state. Editing a
//! field clears that field's displayed error immediately, independent of
//! re-running validation.

use std::collections::HashMap;

use payroll_core::{
    Field, FormInput, Month, PayrollStatement, compute_statement, validate,
};
use tracing::info;

/// In-memory state of the form and its result card.
#[derive(Debug, Default)]
pub struct SalaryForm {
    employee_name: String,
    month: Option<Month>,
    per_day_salary: String,
    overtime_rate: String,
    days_worked: String,
    overtime_hours: String,
    focus_index: usize,
    errors: HashMap<Field, String>,
    result: Option<PayrollStatement>,
}

impl SalaryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field the cursor is on.
    pub fn focus(&self) -> Field {
        Field::ALL[self.focus_index]
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus_index = (self.focus_index + Field::ALL.len() - 1) % Field::ALL.len();
    }

    /// Display text for a field's current value.
    pub fn value(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::EmployeeName => &self.employee_name,
            Field::Month => self.month.map(|m| m.label()).unwrap_or(""),
            Field::PerDaySalary => &self.per_day_salary,
            Field::OvertimeRate => &self.overtime_rate,
            Field::DaysWorked => &self.days_worked,
            Field::OvertimeHours => &self.overtime_hours,
        }
    }

    /// The error currently displayed under a field, if any.
    pub fn error_for(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn result(&self) -> Option<&PayrollStatement> {
        self.result.as_ref()
    }

    pub fn selected_month(&self) -> Option<Month> {
        self.month
    }

    fn is_amount_field(field: Field) -> bool {
        matches!(
            field,
            Field::PerDaySalary | Field::OvertimeRate | Field::DaysWorked | Field::OvertimeHours
        )
    }

    fn buffer_mut(
        &mut self,
        field: Field,
    ) -> Option<&mut String> {
        match field {
            Field::EmployeeName => Some(&mut self.employee_name),
            Field::Month => None,
            Field::PerDaySalary => Some(&mut self.per_day_salary),
            Field::OvertimeRate => Some(&mut self.overtime_rate),
            Field::DaysWorked => Some(&mut self.days_worked),
            Field::OvertimeHours => Some(&mut self.overtime_hours),
        }
    }

    /// Types a character into the focused field.
    ///
    /// Amount fields swallow `-`, `e` and `E` so a sign or exponent never
    /// lands in the buffer. The month field takes no text; it is a
    /// selector. Any edit clears the field's displayed error.
    pub fn input_char(
        &mut self,
        c: char,
    ) {
        let field = self.focus();
        if field == Field::Month {
            return;
        }
        if Self::is_amount_field(field) && matches!(c, '-' | 'e' | 'E') {
            return;
        }
        if let Some(buffer) = self.buffer_mut(field) {
            buffer.push(c);
        }
        self.errors.remove(&field);
    }

    /// Deletes the last character of the focused field. On the month
    /// selector this clears the selection instead.
    pub fn backspace(&mut self) {
        let field = self.focus();
        if field == Field::Month {
            self.month = None;
        } else if let Some(buffer) = self.buffer_mut(field) {
            buffer.pop();
        }
        self.errors.remove(&field);
    }

    /// Advances the month selector, wrapping from December to January.
    pub fn month_next(&mut self) {
        let next = match self.month {
            None => Month::ALL[0],
            Some(current) => {
                let i = Month::ALL.iter().position(|m| *m == current).unwrap_or(0);
                Month::ALL[(i + 1) % Month::ALL.len()]
            }
        };
        self.month = Some(next);
        self.errors.remove(&Field::Month);
    }

    /// Moves the month selector backwards, wrapping from January to
    /// December.
    pub fn month_prev(&mut self) {
        let prev = match self.month {
            None => Month::ALL[Month::ALL.len() - 1],
            Some(current) => {
                let i = Month::ALL.iter().position(|m| *m == current).unwrap_or(0);
                Month::ALL[(i + Month::ALL.len() - 1) % Month::ALL.len()]
            }
        };
        self.month = Some(prev);
        self.errors.remove(&Field::Month);
    }

    /// Current raw values as a validation snapshot.
    pub fn snapshot(&self) -> FormInput {
        FormInput {
            employee_name: self.employee_name.clone(),
            month: self.month.map(|m| m.key().to_string()).unwrap_or_default(),
            per_day_salary: self.per_day_salary.clone(),
            overtime_rate: self.overtime_rate.clone(),
            days_worked: self.days_worked.clone(),
            overtime_hours: self.overtime_hours.clone(),
        }
    }

    /// Runs a full validation pass and, on success, computes the result
    /// card.
    ///
    /// On failure every failing field gets its message; a result card from
    /// an earlier successful submit stays visible until the next success or
    /// a reset.
    pub fn submit(&mut self) {
        self.errors.clear();
        match validate(&self.snapshot()) {
            Ok(input) => {
                info!(employee = input.employee_name(), "form accepted");
                self.result = Some(compute_statement(&input));
            }
            Err(report) => {
                for error in report.iter() {
                    self.errors.insert(error.field(), error.to_string());
                }
            }
        }
    }

    /// Clears every field, every error, and the result card. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_form() -> SalaryForm {
        let mut form = SalaryForm::new();
        for c in "Asha Rao".chars() {
            form.input_char(c);
        }
        form.focus_next(); // month
        form.month_next();
        form.month_next(); // February
        form.focus_next();
        for c in "1000".chars() {
            form.input_char(c);
        }
        form.focus_next();
        for c in "100".chars() {
            form.input_char(c);
        }
        form.focus_next();
        for c in "28".chars() {
            form.input_char(c);
        }
        form.focus_next();
        for c in "5".chars() {
            form.input_char(c);
        }
        form
    }

    #[test]
    fn submit_of_a_complete_form_shows_the_result_card() {
        let mut form = filled_form();

        form.submit();

        let result = form.result().unwrap();
        assert_eq!(result.display_name, "for Asha Rao");
        assert_eq!(result.days_label, "Salary for 28 days in February");
        assert_eq!(result.total_pay, "₹28,500.00");
        assert!(Field::ALL.iter().all(|f| form.error_for(*f).is_none()));
    }

    #[test]
    fn submit_of_an_empty_form_flags_every_field() {
        let mut form = SalaryForm::new();

        form.submit();

        assert!(form.result().is_none());
        for field in Field::ALL {
            assert!(form.error_for(field).is_some(), "{field:?} not flagged");
        }
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = SalaryForm::new();
        form.submit();

        form.input_char('A'); // focused on employee name

        assert_eq!(form.error_for(Field::EmployeeName), None);
        assert!(form.error_for(Field::PerDaySalary).is_some());
    }

    #[test]
    fn cycling_the_month_clears_the_month_error() {
        let mut form = SalaryForm::new();
        form.submit();
        assert!(form.error_for(Field::Month).is_some());

        form.focus_next();
        form.month_next();

        assert_eq!(form.error_for(Field::Month), None);
        assert_eq!(form.selected_month(), Some(Month::January));
    }

    #[test]
    fn amount_fields_swallow_sign_and_exponent_keys() {
        let mut form = SalaryForm::new();
        form.focus_next();
        form.focus_next(); // per-day salary

        for c in "-1e5".chars() {
            form.input_char(c);
        }

        assert_eq!(form.value(Field::PerDaySalary), "15");
    }

    #[test]
    fn the_name_field_accepts_any_character() {
        let mut form = SalaryForm::new();

        for c in "O-e".chars() {
            form.input_char(c);
        }

        assert_eq!(form.value(Field::EmployeeName), "O-e");
    }

    #[test]
    fn month_selector_wraps_in_both_directions() {
        let mut form = SalaryForm::new();
        form.focus_next();

        form.month_prev();
        assert_eq!(form.selected_month(), Some(Month::December));

        form.month_next();
        assert_eq!(form.selected_month(), Some(Month::January));
    }

    #[test]
    fn backspace_on_the_month_selector_clears_the_selection() {
        let mut form = SalaryForm::new();
        form.focus_next();
        form.month_next();

        form.backspace();

        assert_eq!(form.selected_month(), None);
    }

    #[test]
    fn a_failed_submit_keeps_the_previous_result_card() {
        let mut form = filled_form();
        form.submit();
        assert!(form.result().is_some());

        // Damage one field and resubmit.
        form.backspace(); // overtime hours now empty
        form.submit();

        assert!(form.error_for(Field::OvertimeHours).is_some());
        assert!(form.result().is_some());
    }

    #[test]
    fn reset_clears_fields_errors_and_result() {
        let mut form = filled_form();
        form.submit();
        form.reset();

        assert!(form.result().is_none());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error_for(field), None);
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = filled_form();
        form.submit();

        form.reset();
        let snapshot_once = form.snapshot();
        form.reset();

        assert_eq!(form.snapshot(), snapshot_once);
        assert!(form.result().is_none());
    }
}
