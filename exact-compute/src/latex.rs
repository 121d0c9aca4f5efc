//! LaTeX builders for exact values. Every function here is pure formatting; the output is meant
//! to be handed unmodified to a LaTeX renderer.

use crate::exact::{Fraction, Surd};
use crate::number::QuadraticSurd;

/// Renders a fraction as `\frac{n}{d}`, with the sign pulled out in front. Fractions with a
/// denominator of `1` render as plain integers.
pub fn fraction_to_latex(f: &Fraction) -> String {
    if f.denominator == 1 {
        return f.numerator.to_string();
    }

    let sign = if f.is_negative() { "-" } else { "" };
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign,
        f.numerator.unsigned_abs(),
        f.denominator.unsigned_abs(),
    )
}

/// Renders a surd. Coefficients of `1` and `-1` are elided, and fractional coefficients are
/// rendered with [`fraction_to_latex`].
pub fn surd_to_latex(s: &Surd) -> String {
    if s.radicand == 1 || s.coefficient.numerator == 0 {
        return fraction_to_latex(&s.coefficient);
    }

    let root = format!("\\sqrt{{{}}}", s.radicand);
    match s.coefficient {
        Fraction::ONE => root,
        Fraction::NEG_ONE => format!("-{}", root),
        coefficient => format!("{}{}", fraction_to_latex(&coefficient), root),
    }
}

/// Renders a rational multiple of π in one of four shapes: `\pi`, `\frac{\pi}{d}`, `n\pi` or
/// `\frac{n\pi}{d}`.
pub fn pi_to_latex(coefficient: &Fraction) -> String {
    if coefficient.numerator == 0 {
        return "0".to_string();
    }

    let sign = if coefficient.is_negative() { "-" } else { "" };
    let numerator = coefficient.numerator.unsigned_abs();
    let denominator = coefficient.denominator.unsigned_abs();
    match (numerator, denominator) {
        (1, 1) => format!("{}\\pi", sign),
        (1, d) => format!("{}\\frac{{\\pi}}{{{}}}", sign, d),
        (n, 1) => format!("{}{}\\pi", sign, n),
        (n, d) => format!("{}\\frac{{{}\\pi}}{{{}}}", sign, n, d),
    }
}

/// Renders a π coefficient the way it is typed: `\pi`, `-\pi`, `2\pi` or `\frac{1}{2}\pi`.
pub fn pi_coefficient_to_latex(coefficient: &Fraction) -> String {
    match *coefficient {
        Fraction::ZERO => "0".to_string(),
        Fraction::ONE => "\\pi".to_string(),
        Fraction::NEG_ONE => "-\\pi".to_string(),
        coefficient => format!("{}\\pi", fraction_to_latex(&coefficient)),
    }
}

/// Renders a composed quadratic root `(p + q sqrt(r)) / d` in the combined form a graphing
/// calculator shows:
///
/// | `p`     | `d`   | Shape                     |
/// | ------- | ----- | ------------------------- |
/// | zero    | one   | `-3\sqrt{2}`              |
/// | zero    | other | `-\frac{3\sqrt{2}}{4}`    |
/// | nonzero | one   | `-1+\sqrt{5}`             |
/// | nonzero | other | `\frac{-1-3\sqrt{5}}{2}`  |
pub fn quadratic_surd_to_latex(root: &QuadraticSurd) -> String {
    let surd = match root.surd_coefficient.unsigned_abs() {
        1 => format!("\\sqrt{{{}}}", root.radicand),
        q => format!("{}\\sqrt{{{}}}", q, root.radicand),
    };

    if root.constant == 0 {
        let sign = if root.surd_coefficient < 0 { "-" } else { "" };
        if root.denominator == 1 {
            format!("{}{}", sign, surd)
        } else {
            format!("{}\\frac{{{}}}{{{}}}", sign, surd, root.denominator)
        }
    } else {
        let op = if root.surd_coefficient < 0 { "-" } else { "+" };
        let body = format!("{}{}{}", root.constant, op, surd);
        if root.denominator == 1 {
            body
        } else {
            format!("\\frac{{{}}}{{{}}}", body, root.denominator)
        }
    }
}

/// Renders a non-finite value.
pub fn non_finite_to_latex(value: f64) -> String {
    if value.is_nan() {
        "\\text{NaN}".to_string()
    } else if value.is_sign_negative() {
        "-\\infty".to_string()
    } else {
        "\\infty".to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn fractions() {
        assert_eq!(fraction_to_latex(&frac(1, 2)), "\\frac{1}{2}");
        assert_eq!(fraction_to_latex(&frac(-3, 4)), "-\\frac{3}{4}");
        assert_eq!(fraction_to_latex(&frac(-5, 1)), "-5");
    }

    #[test]
    fn surds() {
        assert_eq!(surd_to_latex(&Surd::new(Fraction::ONE, 2)), "\\sqrt{2}");
        assert_eq!(surd_to_latex(&Surd::new(Fraction::NEG_ONE, 2)), "-\\sqrt{2}");
        assert_eq!(surd_to_latex(&Surd::new(frac(3, 1), 5)), "3\\sqrt{5}");
        assert_eq!(surd_to_latex(&Surd::new(frac(-1, 2), 3)), "-\\frac{1}{2}\\sqrt{3}");
        assert_eq!(surd_to_latex(&Surd::new(frac(4, 1), 1)), "4");
    }

    #[test]
    fn pi_shapes() {
        assert_eq!(pi_to_latex(&Fraction::ONE), "\\pi");
        assert_eq!(pi_to_latex(&frac(1, 4)), "\\frac{\\pi}{4}");
        assert_eq!(pi_to_latex(&frac(9, 1)), "9\\pi");
        assert_eq!(pi_to_latex(&frac(-4, 3)), "-\\frac{4\\pi}{3}");
    }

    #[test]
    fn typed_pi() {
        assert_eq!(pi_coefficient_to_latex(&Fraction::NEG_ONE), "-\\pi");
        assert_eq!(pi_coefficient_to_latex(&frac(2, 1)), "2\\pi");
        assert_eq!(pi_coefficient_to_latex(&frac(1, 2)), "\\frac{1}{2}\\pi");
    }

    #[test]
    fn quadratic_shapes() {
        let root = |constant, surd_coefficient, radicand, denominator| QuadraticSurd {
            constant,
            surd_coefficient,
            radicand,
            denominator,
        };
        assert_eq!(quadratic_surd_to_latex(&root(0, 1, 2, 1)), "\\sqrt{2}");
        assert_eq!(quadratic_surd_to_latex(&root(0, -3, 2, 4)), "-\\frac{3\\sqrt{2}}{4}");
        assert_eq!(quadratic_surd_to_latex(&root(-1, 1, 5, 1)), "-1+\\sqrt{5}");
        assert_eq!(quadratic_surd_to_latex(&root(-1, -3, 5, 2)), "\\frac{-1-3\\sqrt{5}}{2}");
    }

    #[test]
    fn non_finite() {
        assert_eq!(non_finite_to_latex(f64::NAN), "\\text{NaN}");
        assert_eq!(non_finite_to_latex(f64::INFINITY), "\\infty");
        assert_eq!(non_finite_to_latex(f64::NEG_INFINITY), "-\\infty");
    }
}
