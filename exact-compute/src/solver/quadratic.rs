use crate::consts::EPSILON;
use crate::convert::convert_to_exact;
use crate::exact::{decimal_to_fraction, gcd, lcm, perfect_square_root, simplify_surd, Fraction, Surd};
use crate::fmt::FormatSettings;
use crate::latex::quadratic_surd_to_latex;
use crate::number::{ExactNumber, QuadraticSurd};
use super::{known, Inputs, SolverResult};

/// The largest scaled discriminant whose square root is simplified when composing roots.
const MAX_COMPOSED_DISCRIMINANT: i64 = 1 << 40;

/// Solves `ax^2 + bx + c = 0` for its real roots.
///
/// Requires `a`, `b` and `c`, with `a != 0`. The result always contains the `discriminant`. If it
/// is positive, the roots are `x_1 = (-b + sqrt(D)) / 2a` and `x_2 = (-b - sqrt(D)) / 2a`; if it
/// is zero, the single root is stored in both. Roots are rational when the discriminant is a
/// perfect square, and composed with [`create_casio_quadratic_solution`] otherwise.
pub fn solve_quadratic(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    let mut results = SolverResult::new();
    let (Some(a), Some(b), Some(c)) = (known(inputs, "a"), known(inputs, "b"), known(inputs, "c")) else {
        log::debug!("quadratic needs a, b and c");
        return results;
    };
    if a == 0.0 {
        log::debug!("quadratic with a = 0 is not a quadratic");
        return results;
    }

    let d = b * b - 4.0 * a * c;
    results.insert("discriminant".to_string(), convert_to_exact(d, settings));

    if d.abs() < EPSILON {
        let root = convert_to_exact(-b / (2.0 * a), settings);
        results.insert("x_1".to_string(), root.clone());
        results.insert("x_2".to_string(), root);
    } else if d > 0.0 {
        let [x1, x2] = match perfect_square_root(d) {
            Some(root) => {
                let root = root as f64;
                [
                    convert_to_exact((-b + root) / (2.0 * a), settings),
                    convert_to_exact((-b - root) / (2.0 * a), settings),
                ]
            },
            None => create_casio_quadratic_solution(a, b, c, settings),
        };
        results.insert("x_1".to_string(), x1);
        results.insert("x_2".to_string(), x2);
    }

    results
}

/// Scales the coefficients to the smallest equivalent integers. Returns [`None`] if one of them is
/// not rational, or if the scaled values overflow.
fn integer_coefficients(a: f64, b: f64, c: f64) -> Option<[i64; 3]> {
    let fractions = [decimal_to_fraction(a)?, decimal_to_fraction(b)?, decimal_to_fraction(c)?];
    let scale = fractions.iter()
        .try_fold(1u64, |acc, f| lcm(acc, f.denominator.unsigned_abs()))?;
    let scale = i64::try_from(scale).ok()?;

    let mut out = [0; 3];
    for (out, f) in out.iter_mut().zip(fractions) {
        *out = f.numerator.checked_mul(scale / f.denominator)?;
    }
    Some(out)
}

/// Composes the exact form of `(p + q sqrt(disc)) / d` for one sign of `q`, reduced so that the
/// denominator is positive and `p`, `q` and `d` share no common factor.
fn compose_root(p: i64, q: i64, radicand: i64, d: i64) -> Option<QuadraticSurd> {
    let (p, q, d) = if d < 0 {
        (p.checked_neg()?, q.checked_neg()?, d.checked_neg()?)
    } else {
        (p, q, d)
    };

    let g = gcd(gcd(p.unsigned_abs(), q.unsigned_abs()), d.unsigned_abs()) as i64;
    Some(QuadraticSurd {
        constant: p / g,
        surd_coefficient: q / g,
        radicand,
        denominator: d / g,
    })
}

/// Builds the exact value of a composed root. Roots without a constant term are plain surds, and
/// are rendered in the same combined style.
fn root_number(root: QuadraticSurd, decimal: f64) -> Option<ExactNumber> {
    if root.constant == 0 {
        let coefficient = Fraction::new(root.surd_coefficient, root.denominator)?;
        let latex = quadratic_surd_to_latex(&root);
        Some(ExactNumber::surd(Surd::new(coefficient, root.radicand), decimal).with_latex(latex))
    } else {
        Some(ExactNumber::quadratic_surd(root, decimal))
    }
}

/// Composes both roots of `ax^2 + bx + c = 0` as a single combined surd expression each, the way
/// a graphing calculator presents them: `\frac{-1+\sqrt{5}}{2}` rather than
/// `-\frac{1}{2}+\frac{1}{2}\sqrt{5}`.
///
/// Rational coefficients are first scaled to integers. The discriminant's square root is then
/// simplified to `k sqrt(r)`, and each root `(-b +- k sqrt(r)) / 2a` is reduced by the common
/// factor of its three integers. If the discriminant turns out to be a perfect square, the roots
/// are rational and are converted with [`convert_to_exact`] instead; the same happens if any
/// coefficient is irrational or the integers overflow.
///
/// `x_1` takes the `+` sign and `x_2` the `-` sign. The discriminant must be positive.
pub fn create_casio_quadratic_solution(
    a: f64,
    b: f64,
    c: f64,
    settings: Option<&FormatSettings>,
) -> [ExactNumber; 2] {
    let root = (b * b - 4.0 * a * c).sqrt();
    let decimals = [(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)];
    let fallback = || decimals.map(|d| convert_to_exact(d, settings));

    let compose = || -> Option<[ExactNumber; 2]> {
        let [a, b, c] = integer_coefficients(a, b, c)?;
        let disc: i64 = (b as i128 * b as i128 - 4 * a as i128 * c as i128).try_into().ok()?;
        if disc > MAX_COMPOSED_DISCRIMINANT {
            return None;
        }
        let surd = simplify_surd(Surd::new(Fraction::ONE, disc));
        if surd.radicand == 1 {
            return None;
        }

        let k = surd.coefficient.numerator;
        let (p, d) = (b.checked_neg()?, a.checked_mul(2)?);
        Some([
            root_number(compose_root(p, k, surd.radicand, d)?, decimals[0])?,
            root_number(compose_root(p, k.checked_neg()?, surd.radicand, d)?, decimals[1])?,
        ])
    };

    compose().unwrap_or_else(|| {
        log::trace!("roots of {}x^2 + {}x + {} are not composed", a, b, c);
        fallback()
    })
}

#[cfg(test)]
mod tests {
    use crate::number::{Exact, Expression, NumberType};
    use pretty_assertions::assert_eq;
    use super::super::inputs;
    use super::*;

    fn solve(a: f64, b: f64, c: f64) -> SolverResult {
        solve_quadratic(&inputs(&[("a", a), ("b", b), ("c", c)]), None)
    }

    fn latex(results: &SolverResult, key: &str) -> String {
        results[key].latex().to_string()
    }

    #[test]
    fn pure_surd_roots() {
        let results = solve(1.0, 0.0, -2.0);
        assert_eq!(results["discriminant"].value(), 8.0);
        assert_eq!(latex(&results, "x_1"), "\\sqrt{2}");
        assert_eq!(latex(&results, "x_2"), "-\\sqrt{2}");
        assert_eq!(results["x_1"].number_type(), NumberType::Surd);
    }

    #[test]
    fn rational_roots() {
        let results = solve(2.0, 3.0, 1.0);
        assert_eq!(latex(&results, "x_1"), "-\\frac{1}{2}");
        assert_eq!(results["x_2"], ExactNumber::integer(-1));
        assert_eq!(results["discriminant"], ExactNumber::integer(1));
    }

    #[test]
    fn constant_and_surd() {
        let results = solve(1.0, -2.0, -1.0);
        assert_eq!(latex(&results, "x_1"), "1+\\sqrt{2}");
        assert_eq!(latex(&results, "x_2"), "1-\\sqrt{2}");
    }

    #[test]
    fn combined_fraction() {
        let results = solve(1.0, 1.0, -1.0);
        assert_eq!(latex(&results, "x_1"), "\\frac{-1+\\sqrt{5}}{2}");
        assert_eq!(latex(&results, "x_2"), "\\frac{-1-\\sqrt{5}}{2}");
        assert!((results["x_1"].value() - 0.6180339887498949).abs() < 1e-12);
        assert!(matches!(results["x_1"].exact(), Exact::Expression(Expression::QuadraticSurd(_))));
    }

    #[test]
    fn fractional_surd() {
        // 4x^2 - 3 = 0 has roots +-sqrt(3)/2
        let results = solve(4.0, 0.0, -3.0);
        assert_eq!(latex(&results, "x_1"), "\\frac{\\sqrt{3}}{2}");
        assert_eq!(latex(&results, "x_2"), "-\\frac{\\sqrt{3}}{2}");

        // 8x^2 - 9 = 0 has roots +-3 sqrt(2)/4
        let results = solve(8.0, 0.0, -9.0);
        assert_eq!(latex(&results, "x_1"), "\\frac{3\\sqrt{2}}{4}");
    }

    #[test]
    fn negative_leading_coefficient() {
        // -x^2 + 2x + 1 = 0 has roots 1 -+ sqrt(2)
        let results = solve(-1.0, 2.0, 1.0);
        assert_eq!(latex(&results, "x_1"), "1-\\sqrt{2}");
        assert_eq!(latex(&results, "x_2"), "1+\\sqrt{2}");
    }

    #[test]
    fn reduces_common_factor() {
        // 2x^2 + 4x - 2 = 0 has roots -1 +- sqrt(2)
        let results = solve(2.0, 4.0, -2.0);
        assert_eq!(latex(&results, "x_1"), "-1+\\sqrt{2}");
        assert_eq!(latex(&results, "x_2"), "-1-\\sqrt{2}");
    }

    #[test]
    fn rational_coefficients() {
        // x^2/2 + x - 1/2 = 0 scales to x^2 + 2x - 1 = 0
        let results = solve(0.5, 1.0, -0.5);
        assert_eq!(latex(&results, "x_1"), "-1+\\sqrt{2}");

        // x^2 - 1/16 = 0 has a discriminant of 1/4, which is a rational square
        let results = solve(1.0, 0.0, -0.0625);
        assert_eq!(latex(&results, "x_1"), "\\frac{1}{4}");
        assert_eq!(latex(&results, "x_2"), "-\\frac{1}{4}");
    }

    #[test]
    fn irrational_coefficients() {
        let results = solve(1.0, std::f64::consts::PI, -1.0);
        assert_eq!(results["x_1"].number_type(), NumberType::Decimal);
    }

    #[test]
    fn repeated_root() {
        let results = solve(1.0, -4.0, 4.0);
        assert_eq!(results["discriminant"], ExactNumber::integer(0));
        assert_eq!(results["x_1"], ExactNumber::integer(2));
        assert_eq!(results["x_2"], ExactNumber::integer(2));
    }

    #[test]
    fn complex_roots() {
        let results = solve(1.0, 0.0, 1.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results["discriminant"], ExactNumber::integer(-4));
    }

    #[test]
    fn insufficient_data() {
        assert!(solve(0.0, 2.0, 1.0).is_empty());
        assert!(solve_quadratic(&inputs(&[("a", 1.0), ("b", 2.0)]), None).is_empty());
    }
}
