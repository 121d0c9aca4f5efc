use std::fmt;
use super::gcd;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rational number `numerator / denominator`.
///
/// Fractions built with [`Fraction::new`] are in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };
    pub const NEG_ONE: Self = Self { numerator: -1, denominator: 1 };

    /// Creates a reduced fraction. Returns [`None`] if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(simplify_fraction(Self { numerator, denominator }))
    }

    /// Creates the fraction `n / 1`.
    pub fn from_integer(n: i64) -> Self {
        Self { numerator: n, denominator: 1 }
    }

    /// Reads a decimal literal such as `2.5`, `.125` or `-0.75` exactly, digit by digit.
    ///
    /// Returns [`None`] if the text is not a plain decimal literal, or if it has too many digits to
    /// fit the numerator and denominator in an `i64`.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty()
            || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let mut numerator: i64 = 0;
        for c in whole.chars().chain(frac.chars()) {
            numerator = numerator.checked_mul(10)?.checked_add(c.to_digit(10)? as i64)?;
        }
        let denominator = 10i64.checked_pow(frac.len() as u32)?;

        Self::new(if negative { -numerator } else { numerator }, denominator)
    }

    /// Reduces a fraction computed with wide intermediates back to `i64` parts.
    fn from_i128(numerator: i128, denominator: i128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }

        let mut g = (numerator.unsigned_abs(), denominator.unsigned_abs());
        while g.1 != 0 {
            g = (g.1, g.0 % g.1);
        }
        let g = g.0.max(1) as i128;

        let sign = if denominator < 0 { -1 } else { 1 };
        Some(Self {
            numerator: i64::try_from(sign * numerator / g).ok()?,
            denominator: i64::try_from(sign * denominator / g).ok()?,
        })
    }

    /// Returns the value of the fraction as a decimal.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns true if the denominator is `1`.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if the fraction is less than zero.
    pub fn is_negative(&self) -> bool {
        (self.numerator < 0) != (self.denominator < 0) && self.numerator != 0
    }

    /// Returns the absolute value of the fraction.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.saturating_abs(),
            denominator: self.denominator.saturating_abs(),
        }
    }

    /// Returns `-self`, or [`None`] on overflow.
    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self {
            numerator: self.numerator.checked_neg()?,
            denominator: self.denominator,
        })
    }

    /// Returns `self + other`, or [`None`] if the reduced result does not fit in an `i64`.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let (a, b) = (self.numerator as i128, self.denominator as i128);
        let (c, d) = (other.numerator as i128, other.denominator as i128);
        Self::from_i128(a * d + c * b, b * d)
    }

    /// Returns `self * other`, or [`None`] if the reduced result does not fit in an `i64`.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        Self::from_i128(
            self.numerator as i128 * other.numerator as i128,
            self.denominator as i128 * other.denominator as i128,
        )
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Divides the numerator and denominator by their greatest common divisor, and moves the sign to
/// the numerator.
pub fn simplify_fraction(f: Fraction) -> Fraction {
    let g = gcd(f.numerator.unsigned_abs(), f.denominator.unsigned_abs());
    if g == 0 {
        return f;
    }

    Fraction::from_i128(f.numerator as i128, f.denominator as i128).unwrap_or(f)
}

/// Returns `a + b` in lowest terms, or [`None`] on overflow.
pub fn add_fractions(a: &Fraction, b: &Fraction) -> Option<Fraction> {
    a.checked_add(b)
}

/// Returns `a * b` in lowest terms, or [`None`] on overflow.
pub fn multiply_fractions(a: &Fraction, b: &Fraction) -> Option<Fraction> {
    a.checked_mul(b)
}
