//! Utility functions to format floating-point numbers the way a JavaScript calculator front-end
//! expects to see them.

use crate::consts::{SCIENTIFIC_LOWER, SCIENTIFIC_UPPER};

/// Returns true if the given value is small or large enough that it should be formatted in
/// scientific notation.
pub fn should_use_scientific(n: f64) -> bool {
    let abs = n.abs();
    abs >= SCIENTIFIC_UPPER || (abs > 0.0 && abs < SCIENTIFIC_LOWER)
}

/// Splits a value rendered by Rust's `{:e}` formatting into its mantissa and exponent.
fn split_exponential(n: f64, fraction_digits: usize) -> (String, i32) {
    let s = format!("{:.*e}", fraction_digits, n);
    match s.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// Formats a value with the given number of digits after the decimal point.
pub fn to_fixed(n: f64, fraction_digits: usize) -> String {
    let s = format!("{:.*}", fraction_digits, n);

    // avoid "-0.00" for tiny negative values
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Formats a value in exponential notation with the given number of digits after the decimal
/// point, e.g. `1.23e+6` or `4.5e-7`.
pub fn to_exponential(n: f64, fraction_digits: usize) -> String {
    let (mantissa, exponent) = split_exponential(n, fraction_digits);
    format!("{}e{}{}", mantissa, if exponent < 0 { '-' } else { '+' }, exponent.abs())
}

/// Formats a value with the given number of significant figures. Like JavaScript's
/// `Number.prototype.toPrecision`, this switches to exponential notation when the exponent is
/// below `-6` or at least `precision`.
pub fn to_precision(n: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if n == 0.0 {
        return to_fixed(0.0, precision - 1);
    }

    let (_, exponent) = split_exponential(n, precision - 1);
    if exponent < -6 || exponent >= precision as i32 {
        to_exponential(n, precision - 1)
    } else {
        to_fixed(n, (precision as i32 - 1 - exponent) as usize)
    }
}

/// Trims trailing zeros from the fractional part of a number in decimal or exponential notation,
/// along with a dangling decimal point.
pub fn trim_trailing_zeros(s: &str) -> String {
    let (mantissa, exponent) = match s.find('e') {
        Some(index) => s.split_at(index),
        None => (s, ""),
    };

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{}{}", mantissa, exponent)
}

/// Renders a value in LaTeX scientific notation, `{mantissa} \times 10^{exp}`.
pub fn latex_scientific(n: f64, fraction_digits: usize, trim: bool) -> String {
    let (mantissa, exponent) = split_exponential(n, fraction_digits);
    let mantissa = if trim { trim_trailing_zeros(&mantissa) } else { mantissa };
    format!("{} \\times 10^{{{}}}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fixed() {
        assert_eq!(to_fixed(3.14159, 2), "3.14");
        assert_eq!(to_fixed(2.0, 3), "2.000");
        assert_eq!(to_fixed(-0.0001, 2), "0.00");
    }

    #[test]
    fn exponential() {
        assert_eq!(to_exponential(1234567.0, 2), "1.23e+6");
        assert_eq!(to_exponential(0.000045, 1), "4.5e-5");
        assert_eq!(to_exponential(-2e10, 0), "-2e+10");
    }

    #[test]
    fn precision() {
        assert_eq!(to_precision(3.14159265, 6), "3.14159");
        assert_eq!(to_precision(0.5, 3), "0.500");
        assert_eq!(to_precision(12345.0, 2), "1.2e+4");
        assert_eq!(to_precision(0.0, 3), "0.00");
        assert_eq!(to_precision(0.00012345, 3), "0.000123");
    }

    #[test]
    fn trimming() {
        assert_eq!(trim_trailing_zeros("0.500"), "0.5");
        assert_eq!(trim_trailing_zeros("2.000"), "2");
        assert_eq!(trim_trailing_zeros("100"), "100");
        assert_eq!(trim_trailing_zeros("1.200e+4"), "1.2e+4");
    }

    #[test]
    fn scientific_thresholds() {
        assert!(should_use_scientific(1e6));
        assert!(should_use_scientific(-2.5e7));
        assert!(should_use_scientific(5e-5));
        assert!(!should_use_scientific(0.0));
        assert!(!should_use_scientific(999_999.0));
        assert!(!should_use_scientific(1e-4));
    }

    #[test]
    fn latex_notation() {
        assert_eq!(latex_scientific(1234567.0, 4, false), "1.2346 \\times 10^{6}");
        assert_eq!(latex_scientific(0.00002, 3, true), "2 \\times 10^{-5}");
    }
}
