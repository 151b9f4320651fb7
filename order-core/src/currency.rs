//! Rupee display formatting.
//!
//! Formatting happens only at the display boundary; the numeric value used
//! for arithmetic is never derived back from the formatted string.

use rust_decimal::Decimal;

/// Format an amount with a `₹` prefix and Indian digit grouping,
/// e.g. `1,56,400`. Trailing fractional zeros are dropped and the
/// fractional part is printed only when non-zero.
pub fn format_inr(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let repr = normalized.abs().to_string();
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (repr.as_str(), None),
    };

    let grouped = group_indian(int_part);
    let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("₹{sign}{grouped}.{frac}"),
        None => format!("₹{sign}{grouped}"),
    }
}

/// Indian grouping: the last three digits form one group, every group
/// before that has two digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut idx = head.len();
    while idx > 2 {
        groups.push(&head[idx - 2..idx]);
        idx -= 2;
    }
    groups.push(&head[..idx]);

    let mut out = String::new();
    for group in groups.iter().rev() {
        out.push_str(group);
        out.push(',');
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inr(s: &str) -> String {
        format_inr(s.parse().unwrap())
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(inr("0"), "₹0");
        assert_eq!(inr("45"), "₹45");
        assert_eq!(inr("650"), "₹650");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(inr("5580"), "₹5,580");
        assert_eq!(inr("36580"), "₹36,580");
        assert_eq!(inr("156400"), "₹1,56,400");
        assert_eq!(inr("10000000"), "₹1,00,00,000");
    }

    #[test]
    fn fractional_part_kept_only_when_nonzero() {
        assert_eq!(inr("1234.50"), "₹1,234.5");
        assert_eq!(inr("1234.00"), "₹1,234");
        assert_eq!(inr("0.05"), "₹0.05");
    }

    #[test]
    fn negative_amounts_carry_the_sign_after_the_symbol() {
        assert_eq!(inr("-25000"), "₹-25,000");
    }
}
