//! Indian-rupee display formatting.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount as rupees: half-up rounding to exactly two decimal
/// places, thousands separated in 3-digit groups from the decimal point.
///
/// For negative amounts the sign follows the symbol (`₹-1,234.50`);
/// validated payroll figures are never negative, so this only shows up in
/// ad-hoc use.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::currency::format_inr;
///
/// assert_eq!(format_inr(dec!(1234567.5)), "₹1,234,567.50");
/// assert_eq!(format_inr(dec!(0)), "₹0.00");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let fixed = format!("{:.2}", round_half_up(amount));
    // Always "digits.dd" after rounding to two places, possibly signed.
    let (number, fraction) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{CURRENCY_SYMBOL}{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_inr(dec!(0)), "₹0.00");
    }

    #[test]
    fn pads_to_two_decimal_places() {
        assert_eq!(format_inr(dec!(1234567.5)), "₹1,234,567.50");
        assert_eq!(format_inr(dec!(500)), "₹500.00");
    }

    #[test]
    fn groups_thousands_from_the_decimal_point() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000.00");
        assert_eq!(format_inr(dec!(28000)), "₹28,000.00");
        assert_eq!(format_inr(dec!(123456789.01)), "₹123,456,789.01");
    }

    #[test]
    fn amounts_under_a_thousand_have_no_separator() {
        assert_eq!(format_inr(dec!(999.99)), "₹999.99");
    }

    #[test]
    fn rounds_half_up_to_the_cent() {
        assert_eq!(format_inr(dec!(10.005)), "₹10.01");
        assert_eq!(format_inr(dec!(10.004)), "₹10.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_after_the_symbol() {
        assert_eq!(format_inr(dec!(-1234.5)), "₹-1,234.50");
    }
}
