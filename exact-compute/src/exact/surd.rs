use crate::consts::{MAX_RADICAND, MAX_SURD_DENOMINATOR};
use super::{approx::decimal_to_fraction_with_limit, are_equal, perfect_square_root, Fraction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A surd `coefficient * sqrt(radicand)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surd {
    pub coefficient: Fraction,
    pub radicand: i64,
}

impl Surd {
    /// Creates a surd without simplifying it.
    pub fn new(coefficient: Fraction, radicand: i64) -> Self {
        Self { coefficient, radicand }
    }

    /// Returns the value of the surd as a decimal.
    pub fn value(&self) -> f64 {
        self.coefficient.value() * (self.radicand as f64).sqrt()
    }
}

/// Moves every perfect-square factor of the radicand into the coefficient, so that
/// `sqrt(72)` becomes `6 sqrt(2)`.
///
/// Radicands of zero or less are returned unchanged, as is any surd whose coefficient would
/// overflow.
pub fn simplify_surd(s: Surd) -> Surd {
    if s.radicand <= 0 {
        return s;
    }

    let mut radicand = s.radicand;
    let mut coefficient = s.coefficient;
    let mut i: i64 = 2;
    while i * i <= radicand {
        let square = i * i;
        while radicand % square == 0 {
            radicand /= square;
            match coefficient.checked_mul(&Fraction::from_integer(i)) {
                Some(c) => coefficient = c,
                None => return s,
            }
        }
        i += 1;
    }

    Surd { coefficient, radicand }
}

/// Searches for a surd equal to the given decimal, trying every non-square radicand from `2` up
/// to [`MAX_RADICAND`] with a coefficient whose denominator is at most [`MAX_SURD_DENOMINATOR`].
///
/// This is a heuristic: [`None`] only means that no surd within those limits matches.
pub fn decimal_to_surd(d: f64) -> Option<Surd> {
    if !d.is_finite() || d == 0.0 {
        return None;
    }

    let target = d.abs();
    (2..=MAX_RADICAND)
        .filter(|&radicand| perfect_square_root(radicand as f64).is_none())
        .find_map(|radicand| {
            let root = (radicand as f64).sqrt();
            let coefficient = decimal_to_fraction_with_limit(target / root, MAX_SURD_DENOMINATOR)?;
            if !are_equal(coefficient.value() * root, target) {
                return None;
            }

            let coefficient = if d < 0.0 { coefficient.checked_neg()? } else { coefficient };
            Some(simplify_surd(Surd::new(coefficient, radicand)))
        })
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use super::*;

    fn surd(n: i64, d: i64, radicand: i64) -> Surd {
        Surd::new(Fraction::new(n, d).unwrap(), radicand)
    }

    #[test]
    fn simplify_extracts_squares() {
        assert_eq!(simplify_surd(surd(1, 1, 72)), surd(6, 1, 2));
        assert_eq!(simplify_surd(surd(1, 2, 12)), surd(1, 1, 3));
        assert_eq!(simplify_surd(surd(-1, 1, 49)), surd(-7, 1, 1));
        assert_eq!(simplify_surd(surd(1, 1, 30)), surd(1, 1, 30));
    }

    #[test]
    fn simplify_ignores_invalid_radicands() {
        assert_eq!(simplify_surd(surd(2, 1, 0)), surd(2, 1, 0));
        assert_eq!(simplify_surd(surd(2, 1, -8)), surd(2, 1, -8));
    }

    #[test]
    fn simplified_radicands_are_square_free() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let radicand = rng.gen_range(1..=100_000);
            let simplified = simplify_surd(surd(1, 1, radicand));
            for i in 2..=((simplified.radicand as f64).sqrt() as i64) {
                assert_ne!(simplified.radicand % (i * i), 0, "{} still divisible by {}", radicand, i * i);
            }
            assert!(are_equal(simplified.value() / (radicand as f64).sqrt(), 1.0));
        }
    }

    #[test]
    fn detects_surds() {
        assert_eq!(decimal_to_surd(2f64.sqrt()), Some(surd(1, 1, 2)));
        assert_eq!(decimal_to_surd(-2f64.sqrt()), Some(surd(-1, 1, 2)));
        assert_eq!(decimal_to_surd(72f64.sqrt()), Some(surd(6, 1, 2)));
        assert_eq!(decimal_to_surd(3f64.sqrt() / 2.0), Some(surd(1, 2, 3)));
        assert_eq!(decimal_to_surd(5.0 * 997f64.sqrt() / 3.0), Some(surd(5, 3, 997)));
    }

    #[test]
    fn rejects_values_outside_the_search() {
        assert_eq!(decimal_to_surd(std::f64::consts::PI), None);
        assert_eq!(decimal_to_surd(1009f64.sqrt()), None);
        assert_eq!(decimal_to_surd(2f64.sqrt() / 23.0), None);
        assert_eq!(decimal_to_surd(0.0), None);
        assert_eq!(decimal_to_surd(f64::NAN), None);
    }
}
