//! Conversion of decimals into their best exact representation.
//!
//! [`convert_to_exact`] tries an ordered list of strategies and returns the first one that
//! succeeds; the order encodes which form a person would write first:
//!
//! 1. non-finite values, which are kept as decimals
//! 2. zero
//! 3. integers (within [`EPSILON`](crate::consts::EPSILON))
//! 4. fractions with a denominator of at most [`MAX_DENOMINATOR`](crate::consts::MAX_DENOMINATOR)
//! 5. surds with a radicand of at most [`MAX_RADICAND`](crate::consts::MAX_RADICAND)
//!
//! Anything else falls back to a formatted decimal.

use crate::consts::{EPSILON, MAX_EXACT_INTEGER};
use crate::exact::{decimal_to_fraction, decimal_to_surd};
use crate::fmt::{default_decimal_latex, format_for_latex, FormatSettings};
use crate::latex::non_finite_to_latex;
use crate::number::ExactNumber;
use std::f64::consts::PI;

/// A conversion strategy. Returns [`None`] if the value does not have the strategy's form.
type Strategy = fn(f64) -> Option<ExactNumber>;

/// Strategies used by [`convert_to_exact`], in priority order.
const EXACT_STRATEGIES: &[(&str, Strategy)] = &[
    ("non-finite", non_finite),
    ("zero", zero),
    ("integer", integer),
    ("fraction", fraction),
    ("surd", surd),
];

/// Strategies used by [`convert_rational`], in priority order.
const RATIONAL_STRATEGIES: &[(&str, Strategy)] = &[
    ("non-finite", non_finite),
    ("zero", zero),
    ("integer", integer),
    ("fraction", fraction),
];

fn non_finite(d: f64) -> Option<ExactNumber> {
    (!d.is_finite()).then(|| ExactNumber::decimal(d, non_finite_to_latex(d)))
}

fn zero(d: f64) -> Option<ExactNumber> {
    (d == 0.0).then(|| ExactNumber::integer(0))
}

fn integer(d: f64) -> Option<ExactNumber> {
    let rounded = d.round();
    if (d - rounded).abs() < EPSILON && rounded.abs() <= MAX_EXACT_INTEGER {
        Some(ExactNumber::integer(rounded as i64))
    } else {
        None
    }
}

fn fraction(d: f64) -> Option<ExactNumber> {
    decimal_to_fraction(d)
        .filter(|f| f.denominator != 1)
        .map(|f| ExactNumber::fraction(f, d))
}

fn surd(d: f64) -> Option<ExactNumber> {
    decimal_to_surd(d).map(|s| ExactNumber::surd(s, d))
}

/// Returns the decimal fallback for a value with no exact form.
fn fallback(d: f64, settings: Option<&FormatSettings>) -> ExactNumber {
    let latex = match settings {
        Some(settings) => format_for_latex(d, settings),
        None => default_decimal_latex(d),
    };
    ExactNumber::decimal(d, latex)
}

fn convert_with(strategies: &[(&str, Strategy)], d: f64, settings: Option<&FormatSettings>) -> ExactNumber {
    for (name, strategy) in strategies {
        if let Some(number) = strategy(d) {
            log::trace!("{} converted by the {} strategy", d, name);
            return number;
        }
    }

    log::trace!("{} has no exact form", d);
    fallback(d, settings)
}

/// Converts a decimal into its best exact representation: an integer, fraction, or surd, or a
/// formatted decimal if none of these fit.
///
/// The decimal fallback is rendered with [`format_for_latex`] if `settings` are given, and with
/// [`default_decimal_latex`] otherwise.
pub fn convert_to_exact(d: f64, settings: Option<&FormatSettings>) -> ExactNumber {
    convert_with(EXACT_STRATEGIES, d, settings)
}

/// Like [`convert_to_exact`], but never produces a surd.
pub fn convert_rational(d: f64, settings: Option<&FormatSettings>) -> ExactNumber {
    convert_with(RATIONAL_STRATEGIES, d, settings)
}

/// Converts a decimal that is expected to be a rational multiple of π, such as the area of a
/// circle with an integer radius. Values that are not a rational multiple of π (and zero) are
/// converted with [`convert_to_exact`].
pub fn convert_with_pi(d: f64, settings: Option<&FormatSettings>) -> ExactNumber {
    if !d.is_finite() {
        return convert_to_exact(d, settings);
    }

    match decimal_to_fraction(d / PI) {
        Some(coefficient) if coefficient.numerator != 0 => {
            log::trace!("{} converted to {}π", d, coefficient);
            ExactNumber::pi(coefficient, d)
        },
        _ => convert_to_exact(d, settings),
    }
}

/// The discriminant and real roots of a quadratic `ax^2 + bx + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticResults {
    /// The discriminant `b^2 - 4ac`.
    pub discriminant: ExactNumber,

    /// The roots `(-b + sqrt(D)) / 2a` and `(-b - sqrt(D)) / 2a`. This is [`None`] if the
    /// discriminant is negative, or if `a` is zero.
    pub roots: Option<[ExactNumber; 2]>,
}

/// Computes the discriminant and the real roots of `ax^2 + bx + c`, each converted with
/// [`convert_to_exact`].
pub fn convert_quadratic_results(
    a: f64,
    b: f64,
    c: f64,
    settings: Option<&FormatSettings>,
) -> QuadraticResults {
    let d = b * b - 4.0 * a * c;
    let discriminant = convert_to_exact(d, settings);
    if d < 0.0 || a == 0.0 || !d.is_finite() {
        return QuadraticResults { discriminant, roots: None };
    }

    let root = d.sqrt();
    let roots = [
        convert_to_exact((-b + root) / (2.0 * a), settings),
        convert_to_exact((-b - root) / (2.0 * a), settings),
    ];
    QuadraticResults { discriminant, roots: Some(roots) }
}
