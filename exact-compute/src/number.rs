//! The [`ExactNumber`] value type.

use crate::exact::{Fraction, Surd};
use crate::latex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of exact representation held by an [`ExactNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum NumberType {
    Integer,
    Fraction,
    Surd,
    Expression,
    Decimal,
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NumberType::Integer => "integer",
            NumberType::Fraction => "fraction",
            NumberType::Surd => "surd",
            NumberType::Expression => "expression",
            NumberType::Decimal => "decimal",
        };
        write!(f, "{}", name)
    }
}

/// A quadratic root composed as `(constant + surd_coefficient * sqrt(radicand)) / denominator`.
///
/// The denominator is positive, the radicand is square-free, and the three integers share no
/// common factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticSurd {
    pub constant: i64,
    pub surd_coefficient: i64,
    pub radicand: i64,
    pub denominator: i64,
}

impl QuadraticSurd {
    /// Returns the value of the root as a decimal.
    pub fn value(&self) -> f64 {
        (self.constant as f64 + self.surd_coefficient as f64 * (self.radicand as f64).sqrt())
            / self.denominator as f64
    }
}

/// An exact expression that is neither rational nor a plain surd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    /// A rational multiple of π; the payload is the coefficient.
    Pi(Fraction),

    /// A quadratic root with both a rational and a surd part.
    QuadraticSurd(QuadraticSurd),
}

/// The exact payload of an [`ExactNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exact {
    Integer(i64),
    Fraction(Fraction),
    Surd(Surd),
    Expression(Expression),

    /// No exact form was found; only the decimal value is meaningful.
    Decimal,
}

/// A number in its best exact representation, together with its decimal value and a
/// pre-rendered LaTeX string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactNumber {
    exact: Exact,
    decimal: f64,
    latex: String,
}

impl ExactNumber {
    /// Creates an integer.
    pub fn integer(n: i64) -> Self {
        Self {
            exact: Exact::Integer(n),
            decimal: n as f64,
            latex: n.to_string(),
        }
    }

    /// Creates a number from a reduced fraction with the given decimal value. Fractions with a
    /// denominator of `1` become integers.
    pub fn fraction(f: Fraction, decimal: f64) -> Self {
        if f.is_integer() {
            return Self::integer(f.numerator);
        }

        Self {
            exact: Exact::Fraction(f),
            decimal,
            latex: latex::fraction_to_latex(&f),
        }
    }

    /// Creates a number from a simplified surd with the given decimal value. Degenerate surds
    /// (radicand `1` or coefficient `0`) become integers or fractions.
    pub fn surd(s: Surd, decimal: f64) -> Self {
        if s.radicand == 1 || s.coefficient.numerator == 0 {
            return Self::fraction(s.coefficient, decimal);
        }

        Self {
            exact: Exact::Surd(s),
            decimal,
            latex: latex::surd_to_latex(&s),
        }
    }

    /// Creates a rational multiple of π, rendered in the canonical `\frac{n\pi}{d}` shapes.
    pub fn pi(coefficient: Fraction, decimal: f64) -> Self {
        Self {
            exact: Exact::Expression(Expression::Pi(coefficient)),
            decimal,
            latex: latex::pi_to_latex(&coefficient),
        }
    }

    /// Creates a composed quadratic root.
    pub fn quadratic_surd(root: QuadraticSurd, decimal: f64) -> Self {
        Self {
            exact: Exact::Expression(Expression::QuadraticSurd(root)),
            decimal,
            latex: latex::quadratic_surd_to_latex(&root),
        }
    }

    /// Creates a number with no exact form.
    pub fn decimal(decimal: f64, latex: String) -> Self {
        Self {
            exact: Exact::Decimal,
            decimal,
            latex,
        }
    }

    /// The NaN-valued placeholder carried by invalid parse results. Its value must not be used.
    pub fn invalid() -> Self {
        Self::decimal(f64::NAN, latex::non_finite_to_latex(f64::NAN))
    }

    /// Replaces the rendered LaTeX, keeping the exact payload and decimal value.
    pub(crate) fn with_latex(self, latex: String) -> Self {
        Self { latex, ..self }
    }

    /// The exact payload.
    pub fn exact(&self) -> &Exact {
        &self.exact
    }

    /// The decimal value.
    pub fn value(&self) -> f64 {
        self.decimal
    }

    /// The pre-rendered LaTeX.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// The kind of representation held.
    pub fn number_type(&self) -> NumberType {
        match self.exact {
            Exact::Integer(_) => NumberType::Integer,
            Exact::Fraction(_) => NumberType::Fraction,
            Exact::Surd(_) => NumberType::Surd,
            Exact::Expression(_) => NumberType::Expression,
            Exact::Decimal => NumberType::Decimal,
        }
    }

    /// Returns true if the payload is a fully reduced exact form. Only decimal fallbacks are not.
    pub fn simplified(&self) -> bool {
        !matches!(self.exact, Exact::Decimal)
    }
}

impl fmt::Display for ExactNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.latex)
    }
}
