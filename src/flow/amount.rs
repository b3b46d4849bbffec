//! Monetary rounding and rendering.
//!
//! Amounts are rounded to 8 decimal places the moment they are read from
//! the table, so downstream sums never accumulate float noise past the
//! accounting tolerance.

/// Absolute tolerance for accounting comparisons.
pub const AMOUNT_EPSILON: f64 = 1e-8;

/// Rounds to 8 decimal places, half away from zero: `33.333333335`
/// becomes `33.33333334`.
pub fn round8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8
}

/// Renders an amount the way the chart shows money: integers without
/// decimals, anything else with exactly two, both thousands-grouped.
pub fn format_amount(amount: f64) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let magnitude = amount.abs();
    let body = if magnitude.fract() == 0.0 {
        group_digits(&format!("{}", magnitude as i128))
    } else {
        let fixed = format!("{:.2}", magnitude);
        match fixed.split_once('.') {
            Some((int_part, frac)) => format!("{}.{}", group_digits(int_part), frac),
            None => group_digits(&fixed),
        }
    };
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

// Thousands separators, right to left.
fn group_digits(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_round8_boundary() {
        // Exact boundary value from the accounting contract.
        assert_eq!(round8(33.333333335), 33.33333334);
        assert_eq!(round8(0.1 + 0.2), 0.3);
        assert_eq!(round8(100.0), 100.0);
    }

    #[rstest]
    #[case(150.0, "150")]
    #[case(1500.0, "1,500")]
    #[case(1234567.0, "1,234,567")]
    #[case(1234.5, "1,234.50")]
    #[case(0.25, "0.25")]
    #[case(0.0, "0")]
    #[case(-1500.0, "-1,500")]
    #[case(-12.345, "-12.35")]
    fn test_format_amount(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }
}
