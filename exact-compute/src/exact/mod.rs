//! Numeric building blocks: fractions, surds, and the searches that recover them from decimals.

mod approx;
mod fraction;
mod surd;

pub use approx::{decimal_to_fraction, decimal_to_fraction_with_limit};
pub use fraction::{add_fractions, multiply_fractions, simplify_fraction, Fraction};
pub use surd::{decimal_to_surd, simplify_surd, Surd};

use crate::consts::EPSILON;

/// Returns true if the two values differ by less than [`EPSILON`].
pub fn are_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns the greatest common divisor of `a` and `b`. `gcd(0, 0)` is `0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Returns the least common multiple of `a` and `b`, or [`None`] if it overflows. `lcm(0, n)` is
/// `0`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Returns the integer square root of `n` if `n` is a perfect square (within [`EPSILON`]).
pub fn perfect_square_root(n: f64) -> Option<i64> {
    if !n.is_finite() || n < 0.0 {
        return None;
    }

    let root = n.sqrt();
    let rounded = root.round();
    are_equal(root, rounded).then_some(rounded as i64)
}
