//! Free-text number input.
//!
//! [`parse_input`] sniffs the format of what the user typed by trying an ordered list of
//! matchers against the token stream, from the most specific syntax (a bare integer) to the least
//! specific (a general expression). The first matcher that recognizes the input decides its
//! [`DetectedFormat`], even if the value it describes turns out to be invalid.

pub mod error;

use crate::consts::MAX_EXACT_INTEGER;
use crate::convert::convert_rational;
use crate::exact::{decimal_to_fraction, simplify_surd, Fraction, Surd};
use crate::fmt::default_decimal_latex;
use crate::latex::pi_coefficient_to_latex;
use crate::numerical::{eval_str, Ctxt};
use crate::number::ExactNumber;
use error::{DivisionByZero, EmptyInput, NegativeRadicand, NonFiniteResult};
use exact_error::Error;
use exact_parser::tokenizer::{tokenize_complete, Token, TokenKind};
use std::f64::consts::PI;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The format of a piece of input, decided by the first matcher that recognized it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum DetectedFormat {
    /// Nothing was recognized. This is only the case for empty input.
    Unknown,

    /// A bare integer, such as `-12`.
    Integer,

    /// A simple fraction, such as `3/4`.
    Fraction,

    /// A whole number followed by a fraction, such as `-2 1/3`.
    MixedFraction,

    /// A square root with an optional coefficient, such as `sqrt(8)` or `2.5 rt(3)`.
    Surd,

    /// A multiple of π, such as `pi`, `3pi/4` or `0.5 * π`.
    Pi,

    /// A decimal number, such as `0.125`.
    Decimal,

    /// Anything else, evaluated as an arithmetic expression.
    Expression,
}

/// The result of parsing a piece of input.
#[derive(Debug)]
pub struct ParsedInput {
    /// The parsed value. If the input is invalid, this is a NaN-valued placeholder that must not be
    /// used.
    pub value: ExactNumber,

    /// The input text, as given.
    pub original_text: String,

    /// The format of the input.
    pub detected_format: DetectedFormat,

    /// Why the input is invalid, if it is. Spans point into [`ParsedInput::original_text`].
    pub error: Option<Error>,
}

impl ParsedInput {
    /// Returns true if the input was parsed successfully.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns a human-readable reason why the input is invalid.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(Error::message)
    }
}

/// Input prepared for the matchers.
struct Input<'a> {
    /// The trimmed input, with `π` spelled as `pi`.
    source: &'a str,

    /// Every token of the source.
    tokens: &'a [Token<'a>],

    /// The tokens of the source, without whitespace.
    compact: &'a [Token<'a>],
}

/// The outcome of a matcher that recognized its format.
type Matched = Result<ExactNumber, Error>;

/// A matcher returns [`None`] if the input is not in its format.
type Matcher = fn(&Input) -> Option<Matched>;

/// The matchers tried by [`parse_input`], in order. Input that none of them recognize is
/// evaluated as an expression.
const MATCHERS: &[(DetectedFormat, Matcher)] = &[
    (DetectedFormat::Integer, integer),
    (DetectedFormat::Fraction, fraction),
    (DetectedFormat::MixedFraction, mixed_fraction),
    (DetectedFormat::Surd, surd),
    (DetectedFormat::Surd, coefficient_surd),
    (DetectedFormat::Pi, pi),
    (DetectedFormat::Pi, coefficient_pi),
    (DetectedFormat::Decimal, decimal),
];

/// Splits off a leading `-` or `+`, returning true if the input is negated.
fn split_sign<'a, 'b>(tokens: &'b [Token<'a>]) -> (bool, &'b [Token<'a>]) {
    match tokens {
        [first, rest @ ..] if first.kind == TokenKind::Sub => (true, rest),
        [first, rest @ ..] if first.kind == TokenKind::Add => (false, rest),
        _ => (false, tokens),
    }
}

/// Parses an integer token, applying the sign. Returns [`None`] if it does not fit in an `i64`.
fn signed_int(negative: bool, token: &Token) -> Option<i64> {
    let n = token.lexeme.parse::<i64>().ok()?;
    if negative { n.checked_neg() } else { Some(n) }
}

fn is_root(token: &Token) -> bool {
    token.kind == TokenKind::Name && matches!(token.lexeme, "sqrt" | "rt")
}

fn is_pi(token: &Token) -> bool {
    token.kind == TokenKind::Name && token.lexeme == "pi"
}

fn is_mul(token: &Token) -> bool {
    token.kind == TokenKind::Mul
}

/// `-?\d+`
///
/// Integers that cannot be held exactly by an `f64` are converted like any other decimal.
fn integer(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.tokens);
    match rest {
        [n] if n.kind == TokenKind::Int => match signed_int(negative, n) {
            Some(n) if n.unsigned_abs() <= MAX_EXACT_INTEGER as u64 => Some(Ok(ExactNumber::integer(n))),
            _ => {
                let value = input.source.parse::<f64>().ok()?;
                Some(Ok(convert_rational(value, None)))
            },
        },
        _ => None,
    }
}

/// `-?\d+/\d+`
fn fraction(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.tokens);
    match rest {
        [n, div, d] if n.kind == TokenKind::Int && div.kind == TokenKind::Div && d.kind == TokenKind::Int => {
            let numerator = signed_int(negative, n)?;
            let denominator = d.lexeme.parse::<i64>().ok()?;
            let Some(f) = Fraction::new(numerator, denominator) else {
                return Some(Err(Error::new(vec![d.span.clone()], DivisionByZero)));
            };
            Some(Ok(ExactNumber::fraction(f, numerator as f64 / denominator as f64)))
        },
        _ => None,
    }
}

/// `-?\d+\s+\d+/\d+`
fn mixed_fraction(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.tokens);
    match rest {
        [whole, space, n, div, d]
            if whole.kind == TokenKind::Int
                && space.kind == TokenKind::Whitespace
                && n.kind == TokenKind::Int
                && div.kind == TokenKind::Div
                && d.kind == TokenKind::Int =>
        {
            let whole = whole.lexeme.parse::<i64>().ok()?;
            let numerator = n.lexeme.parse::<i64>().ok()?;
            let denominator = d.lexeme.parse::<i64>().ok()?;
            let Some(part) = Fraction::new(numerator, denominator) else {
                return Some(Err(Error::new(vec![d.span.clone()], DivisionByZero)));
            };

            let magnitude = Fraction::from_integer(whole).checked_add(&part)?;
            let f = if negative { magnitude.checked_neg()? } else { magnitude };
            Some(Ok(ExactNumber::fraction(f, f.value())))
        },
        _ => None,
    }
}

/// Builds the value of `coefficient * sqrt(radicand)`, where the radicand token may be negated.
fn root_value(coefficient: Fraction, radicand_negative: bool, radicand: &Token) -> Option<Matched> {
    let n = radicand.lexeme.parse::<i64>().ok()?;
    if radicand_negative && n != 0 {
        return Some(Err(Error::new(vec![radicand.span.clone()], NegativeRadicand)));
    } else if n == 0 {
        return Some(Ok(ExactNumber::integer(0)));
    }

    let s = simplify_surd(Surd::new(coefficient, n));
    Some(Ok(ExactNumber::surd(s, s.value())))
}

/// Matches `sqrt(n)` or `rt(n)` at the start of the tokens, returning whether the radicand is
/// negated and the radicand token.
fn split_root<'a, 'b>(tokens: &'b [Token<'a>]) -> Option<(bool, &'b Token<'a>)> {
    match tokens {
        [name, open, rest @ .., close]
            if is_root(name)
                && open.kind == TokenKind::OpenParen
                && close.kind == TokenKind::CloseParen =>
        {
            match split_sign(rest) {
                (negative, [radicand]) if radicand.kind == TokenKind::Int => Some((negative, radicand)),
                _ => None,
            }
        },
        _ => None,
    }
}

/// `-?(sqrt|rt)\(-?\d+\)`
fn surd(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.compact);
    let (radicand_negative, radicand) = split_root(rest)?;
    let coefficient = if negative { Fraction::NEG_ONE } else { Fraction::ONE };
    root_value(coefficient, radicand_negative, radicand)
}

/// `-?c\*?(sqrt|rt)\(-?\d+\)`, where `c` is an integer or decimal.
fn coefficient_surd(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.compact);
    let (c, rest) = match rest {
        [c, mul, rest @ ..] if c.kind.is_number() && is_mul(mul) => (c, rest),
        [c, rest @ ..] if c.kind.is_number() => (c, rest),
        _ => return None,
    };

    let (radicand_negative, radicand) = split_root(rest)?;
    let coefficient = Fraction::from_decimal_str(c.lexeme)?;
    let coefficient = if negative { coefficient.checked_neg()? } else { coefficient };
    root_value(coefficient, radicand_negative, radicand)
}

/// `[+-]?pi`
fn pi(input: &Input) -> Option<Matched> {
    match split_sign(input.compact) {
        (negative, [p]) if is_pi(p) => {
            let (coefficient, value) = if negative { (Fraction::NEG_ONE, -PI) } else { (Fraction::ONE, PI) };
            Some(Ok(ExactNumber::pi(coefficient, value)))
        },
        _ => None,
    }
}

/// Builds the value of `coefficient * pi`, where `coefficient` is written as `lexeme / divisor`.
fn pi_value(negative: bool, lexeme: &str, divisor: Option<&Token>) -> Option<Matched> {
    let denominator = match divisor {
        Some(d) => match d.lexeme.parse::<i64>().ok()? {
            0 => return Some(Err(Error::new(vec![d.span.clone()], DivisionByZero))),
            d => d,
        },
        None => 1,
    };

    let sign = if negative { -1.0 } else { 1.0 };
    let decimal = sign * lexeme.parse::<f64>().ok()? / denominator as f64;

    // integer coefficients are exact as written; decimal ones only if they are a clean fraction
    let coefficient = if lexeme.contains('.') {
        decimal_to_fraction(decimal)
    } else {
        Fraction::from_decimal_str(lexeme)
            .and_then(|c| c.checked_mul(&Fraction::new(if negative { -1 } else { 1 }, denominator)?))
    };

    Some(Ok(match coefficient {
        Some(Fraction::ZERO) => ExactNumber::integer(0),
        Some(c) => ExactNumber::pi(c, decimal * PI).with_latex(pi_coefficient_to_latex(&c)),
        None => ExactNumber::decimal(decimal * PI, format!("{}\\pi", default_decimal_latex(decimal))),
    }))
}

/// `-?c\*?pi(/\d+)?` or `-?pi/\d+`, where `c` is an integer or decimal.
fn coefficient_pi(input: &Input) -> Option<Matched> {
    let (negative, rest) = split_sign(input.compact);
    let (lexeme, rest) = match rest {
        [c, mul, p, rest @ ..] if c.kind.is_number() && is_mul(mul) && is_pi(p) => (c.lexeme, rest),
        [c, p, rest @ ..] if c.kind.is_number() && is_pi(p) => (c.lexeme, rest),
        [p, rest @ ..] if is_pi(p) && !rest.is_empty() => ("1", rest),
        _ => return None,
    };

    match rest {
        [] => pi_value(negative, lexeme, None),
        [div, d] if div.kind == TokenKind::Div && d.kind == TokenKind::Int => {
            pi_value(negative, lexeme, Some(d))
        },
        _ => None,
    }
}

/// `-?\d*\.?\d+`
fn decimal(input: &Input) -> Option<Matched> {
    match split_sign(input.tokens) {
        (_, [n]) if n.kind.is_number() => {
            let value = input.source.parse::<f64>().ok()?;
            Some(Ok(convert_rational(value, None)))
        },
        _ => None,
    }
}

/// Evaluates the input as an arithmetic expression.
fn expression(input: &Input) -> Matched {
    let value = eval_str(input.source, &Ctxt::default())?;
    if value.is_finite() {
        Ok(convert_rational(value, None))
    } else {
        Err(Error::new(vec![0..input.source.len()], NonFiniteResult))
    }
}

/// Moves the spans of an error from the trimmed input to the original text.
fn shift_spans(mut err: Error, offset: usize) -> Error {
    err.spans = err.spans
        .into_iter()
        .map(|span: Range<usize>| span.start + offset..span.end + offset)
        .collect();
    err
}

/// Parses a piece of free-text number input.
///
/// This function never fails; invalid input is reported through [`ParsedInput::error`], with
/// the format that was recognized in [`ParsedInput::detected_format`].
pub fn parse_input(text: &str) -> ParsedInput {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedInput {
            value: ExactNumber::invalid(),
            original_text: text.to_string(),
            detected_format: DetectedFormat::Unknown,
            error: Some(Error::new(vec![0..text.len()], EmptyInput)),
        };
    }

    // `π` and `pi` have the same length in bytes, so spans are unaffected
    let offset = text.len() - text.trim_start().len();
    let source = trimmed.replace('π', "pi");
    let tokens = tokenize_complete(&source);
    let compact = tokens.iter()
        .filter(|token| !token.is_whitespace())
        .cloned()
        .collect::<Vec<_>>();
    let input = Input { source: &source, tokens: &tokens, compact: &compact };

    let (detected_format, matched) = MATCHERS.iter()
        .find_map(|(format, matcher)| matcher(&input).map(|matched| (*format, matched)))
        .unwrap_or_else(|| (DetectedFormat::Expression, expression(&input)));

    let (value, error) = match matched {
        Ok(value) => (value, None),
        Err(err) => {
            log::debug!("invalid {:?} input `{}`: {}", detected_format, trimmed, err.message());
            (ExactNumber::invalid(), Some(shift_spans(err, offset)))
        },
    };

    ParsedInput {
        value,
        original_text: text.to_string(),
        detected_format,
        error,
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::convert_to_exact;
    use crate::number::{Exact, Expression, NumberType};
    use pretty_assertions::assert_eq;
    use super::*;

    fn valid(text: &str) -> (DetectedFormat, ExactNumber) {
        let parsed = parse_input(text);
        assert!(parsed.is_valid(), "`{}` is invalid: {:?}", text, parsed.error_message());
        (parsed.detected_format, parsed.value)
    }

    fn invalid(text: &str) -> (DetectedFormat, String, Vec<Range<usize>>) {
        let parsed = parse_input(text);
        assert!(parsed.value.value().is_nan());
        let err = parsed.error.expect("input should be invalid");
        (parsed.detected_format, err.message(), err.spans)
    }

    #[test]
    fn empty() {
        assert_eq!(invalid(""), (DetectedFormat::Unknown, "Input cannot be empty".to_string(), vec![0..0]));
        assert_eq!(invalid("  \t").1, "Input cannot be empty");
    }

    #[test]
    fn integers() {
        assert_eq!(valid("42"), (DetectedFormat::Integer, ExactNumber::integer(42)));
        assert_eq!(valid("  -7 "), (DetectedFormat::Integer, ExactNumber::integer(-7)));
        assert_eq!(valid("+5"), (DetectedFormat::Integer, ExactNumber::integer(5)));
    }

    #[test]
    fn integers_beyond_f64_precision() {
        let (format, value) = valid("12345678901234567890");
        assert_eq!(format, DetectedFormat::Integer);
        assert_eq!(value.number_type(), NumberType::Decimal);
        assert_eq!(value.value(), 12345678901234567890.0);

        let (format, value) = valid("-12345678901234567890");
        assert_eq!(format, DetectedFormat::Integer);
        assert_eq!(value.value(), -12345678901234567890.0);

        let (format, value) = valid("9007199254740993");
        assert_eq!(format, DetectedFormat::Integer);
        assert_eq!(value.value(), 9007199254740992.0);
        assert_eq!(value.latex(), "9007199254740992");

        assert_eq!(valid("9007199254740992").1, ExactNumber::integer(9_007_199_254_740_992));
    }

    #[test]
    fn fractions() {
        let (format, value) = valid("1/2");
        assert_eq!(format, DetectedFormat::Fraction);
        assert_eq!(value.latex(), "\\frac{1}{2}");
        assert_eq!(value.value(), 0.5);

        let (format, value) = valid("-6/4");
        assert_eq!(format, DetectedFormat::Fraction);
        assert_eq!(value.latex(), "-\\frac{3}{2}");

        assert_eq!(valid("8/4"), (DetectedFormat::Fraction, ExactNumber::integer(2)));
    }

    #[test]
    fn fraction_division_by_zero() {
        assert_eq!(invalid("3/0"), (DetectedFormat::Fraction, "Division by zero".to_string(), vec![2..3]));
        assert_eq!(invalid(" 1 1/0").2, vec![5..6]);
    }

    #[test]
    fn mixed_fractions() {
        let (format, value) = valid("2 1/3");
        assert_eq!(format, DetectedFormat::MixedFraction);
        assert_eq!(value.latex(), "\\frac{7}{3}");

        let (_, value) = valid("-1 3/4");
        assert_eq!(value.latex(), "-\\frac{7}{4}");
        assert_eq!(value.value(), -1.75);
    }

    #[test]
    fn surds() {
        let (format, value) = valid("sqrt(2)");
        assert_eq!(format, DetectedFormat::Surd);
        assert_eq!(value.latex(), "\\sqrt{2}");

        assert_eq!(valid("-rt(12)").1.latex(), "-2\\sqrt{3}");
        assert_eq!(valid("sqrt(9)"), (DetectedFormat::Surd, ExactNumber::integer(3)));
        assert_eq!(valid("sqrt(0)").1, ExactNumber::integer(0));
    }

    #[test]
    fn negative_radicand() {
        assert_eq!(invalid("sqrt(-4)"), (DetectedFormat::Surd, "Negative radicand".to_string(), vec![6..7]));
    }

    #[test]
    fn coefficient_surds() {
        assert_eq!(valid("3*sqrt(2)").1.latex(), "3\\sqrt{2}");
        assert_eq!(valid("2 sqrt(8)").1.latex(), "4\\sqrt{2}");
        assert_eq!(valid("-0.5sqrt(3)").1.latex(), "-\\frac{1}{2}\\sqrt{3}");

        let (format, value) = valid("1.5 * rt(5)");
        assert_eq!(format, DetectedFormat::Surd);
        assert!(matches!(value.exact(), Exact::Surd(_)));
    }

    #[test]
    fn pi_multiples() {
        let (format, value) = valid("pi");
        assert_eq!(format, DetectedFormat::Pi);
        assert_eq!(value.latex(), "\\pi");
        assert_eq!(value.number_type(), NumberType::Expression);

        assert_eq!(valid("-π").1.latex(), "-\\pi");
        assert_eq!(valid("2pi").1.latex(), "2\\pi");
        assert_eq!(valid("0.5 * pi").1.latex(), "\\frac{1}{2}\\pi");
        assert_eq!(valid("3pi/4").1.latex(), "\\frac{3}{4}\\pi");
        assert_eq!(valid("pi/2").1.latex(), "\\frac{1}{2}\\pi");
        assert_eq!(valid("0pi").1, ExactNumber::integer(0));
        assert_eq!(valid("0.125pi/2").1.latex(), "\\frac{1}{16}\\pi");

        let (_, value) = valid("-2π");
        assert_eq!(value.exact(), &Exact::Expression(Expression::Pi(Fraction::new(-2, 1).unwrap())));
        assert!((value.value() + 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn pi_multiples_with_irrational_coefficient() {
        let (format, value) = valid("0.3333333pi");
        assert_eq!(format, DetectedFormat::Pi);
        assert_eq!(value.latex(), "0.333333\\pi");
        assert_eq!(value.number_type(), NumberType::Decimal);
        assert!((value.value() - 0.3333333 * PI).abs() < 1e-12);

        let (_, value) = valid("-1.41421356 * pi");
        assert_eq!(value.latex(), "-1.41421\\pi");
        assert!((value.value() + 1.41421356 * PI).abs() < 1e-12);
    }

    #[test]
    fn pi_division_by_zero() {
        assert_eq!(invalid("pi/0"), (DetectedFormat::Pi, "Division by zero".to_string(), vec![3..4]));
    }

    #[test]
    fn decimals() {
        let (format, value) = valid("0.25");
        assert_eq!(format, DetectedFormat::Decimal);
        assert_eq!(value.latex(), "\\frac{1}{4}");

        let (format, value) = valid("-.5");
        assert_eq!(format, DetectedFormat::Decimal);
        assert_eq!(value.latex(), "-\\frac{1}{2}");

        assert_eq!(valid("2.0"), (DetectedFormat::Decimal, ExactNumber::integer(2)));

        let (_, value) = valid("3.14159265");
        assert_eq!(value.number_type(), NumberType::Decimal);
        assert_eq!(value.latex(), "3.14159");
    }

    #[test]
    fn expressions() {
        assert_eq!(valid("1 + 2 * 3"), (DetectedFormat::Expression, ExactNumber::integer(7)));
        assert_eq!(valid("(1 + 1) / 4").1.latex(), "\\frac{1}{2}");
        assert_eq!(valid("sqrt(16) + 1").1, ExactNumber::integer(5));
        assert_eq!(valid("2^10").1, ExactNumber::integer(1024));
    }

    #[test]
    fn invalid_expressions() {
        assert_eq!(
            invalid("1 / (2 - 2)"),
            (DetectedFormat::Expression, "Expression did not evaluate to a finite number".to_string(), vec![0..11]),
        );

        let (format, message, spans) = invalid(" 2 * x");
        assert_eq!(format, DetectedFormat::Expression);
        assert_eq!(message, "`x` is not defined");
        assert_eq!(spans, vec![5..6]);

        assert_eq!(invalid("1 +").1, "unexpected end of input");
        assert_eq!(invalid("sqrt(-2.5)").1, "Expression did not evaluate to a finite number");
    }

    #[test]
    fn round_trip_through_converter() {
        for text in ["17", "-3/8", "2 1/2", "sqrt(50)", "-2*sqrt(3)", "0.75"] {
            let (_, parsed) = valid(text);
            let converted = convert_to_exact(parsed.value(), None);
            assert_eq!(converted.number_type(), parsed.number_type(), "{}", text);
            assert_eq!(converted.latex(), parsed.latex(), "{}", text);
        }
    }
}
