use crate::consts::{EPSILON, MAX_DENOMINATOR, MAX_EXACT_INTEGER};
use super::Fraction;

/// Approximates the given decimal as a fraction with a denominator of at most
/// [`MAX_DENOMINATOR`].
///
/// See [`decimal_to_fraction_with_limit`].
pub fn decimal_to_fraction(d: f64) -> Option<Fraction> {
    decimal_to_fraction_with_limit(d, MAX_DENOMINATOR)
}

/// Approximates the given decimal as a fraction whose denominator is at most `max_denominator`.
///
/// This function applies the continued fraction algorithm to the magnitude of the decimal, and
/// stops at the first convergent that is within [`EPSILON`] of it. If the denominator of the
/// convergents exceeds `max_denominator` first, the decimal is treated as irrational and [`None`]
/// is returned.
///
/// See
/// [Wikipedia](https://en.wikipedia.org/wiki/Continued_fraction#Calculating_continued_fraction_representations)
/// for more information.
pub fn decimal_to_fraction_with_limit(d: f64, max_denominator: i64) -> Option<Fraction> {
    if !d.is_finite() {
        return None;
    }

    let sign = if d < 0.0 { -1 } else { 1 };
    let x = d.abs();
    if x > MAX_EXACT_INTEGER {
        return None;
    }

    let rounded = x.round();
    if (x - rounded).abs() < EPSILON {
        return Fraction::new(sign * rounded as i64, 1);
    }

    // convergents h / k of the continued fraction [a0; a1, a2, ...]
    let (mut h1, mut h2) = (1.0, 0.0);
    let (mut k1, mut k2) = (0.0, 1.0);
    let mut b = x;
    loop {
        let a = b.floor();
        (h1, h2) = (a * h1 + h2, h1);
        (k1, k2) = (a * k1 + k2, k1);

        if k1 > max_denominator as f64 || h1 > MAX_EXACT_INTEGER {
            return None;
        }

        if (x - h1 / k1).abs() < EPSILON {
            break;
        }

        let fractional = b - a;
        if fractional == 0.0 {
            return None;
        }
        b = fractional.recip();
    }

    Fraction::new(sign * h1 as i64, k1 as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(decimal_to_fraction(4.0), Fraction::new(4, 1));
        assert_eq!(decimal_to_fraction(-3.0000000000001), Fraction::new(-3, 1));
        assert_eq!(decimal_to_fraction(0.0), Some(Fraction::ZERO));
    }

    #[test]
    fn simple_fractions() {
        assert_eq!(decimal_to_fraction(0.5), Fraction::new(1, 2));
        assert_eq!(decimal_to_fraction(1.0 / 3.0), Fraction::new(1, 3));
        assert_eq!(decimal_to_fraction(-0.75), Fraction::new(-3, 4));
        assert_eq!(decimal_to_fraction(0.1 + 0.2), Fraction::new(3, 10));
        assert_eq!(decimal_to_fraction(22.0 / 7.0), Fraction::new(22, 7));
    }

    #[test]
    fn large_denominator_within_cap() {
        assert_eq!(decimal_to_fraction(1.0 / 9973.0), Fraction::new(1, 9973));
    }

    #[test]
    fn irrational_exceeds_cap() {
        assert_eq!(decimal_to_fraction(std::f64::consts::PI), None);
        assert_eq!(decimal_to_fraction(2f64.sqrt()), None);
        assert_eq!(decimal_to_fraction(1.0 / 10007.0), None);
    }

    #[test]
    fn custom_limit() {
        assert_eq!(decimal_to_fraction_with_limit(0.35, 20), Fraction::new(7, 20));
        assert_eq!(decimal_to_fraction_with_limit(1.0 / 21.0, 20), None);
    }

    #[test]
    fn non_finite() {
        assert_eq!(decimal_to_fraction(f64::NAN), None);
        assert_eq!(decimal_to_fraction(f64::INFINITY), None);
        assert_eq!(decimal_to_fraction(1e300), None);
    }
}
