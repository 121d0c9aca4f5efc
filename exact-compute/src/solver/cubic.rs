use crate::consts::EPSILON;
use crate::convert::convert_to_exact;
use crate::fmt::FormatSettings;
use std::f64::consts::TAU;
use super::{known, Inputs, SolverResult};

/// Roots closer together than this are reported once.
const DISTINCT_ROOT_TOLERANCE: f64 = 1e-7;

/// Refines a root of `ax^3 + bx^2 + cx + d` with a few steps of Newton's method.
fn polish(x: f64, [a, b, c, d]: [f64; 4]) -> f64 {
    let mut x = x;
    for _ in 0..3 {
        let f = ((a * x + b) * x + c) * x + d;
        let df = (3.0 * a * x + 2.0 * b) * x + c;
        if df == 0.0 || f == 0.0 {
            break;
        }
        x -= f / df;
    }
    x
}

/// Returns the distinct real roots of `ax^3 + bx^2 + cx + d`, in ascending order. `a` must not be
/// zero.
fn real_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    // substitute x = t - b / 3a to get the depressed cubic t^3 + pt + q
    let shift = b / (3.0 * a);
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a.powi(3));
    let delta = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let depressed = if p.abs() < EPSILON && q.abs() < EPSILON {
        vec![0.0]
    } else if delta.abs() < EPSILON && p.abs() >= EPSILON {
        vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
    } else if delta >= 0.0 || p.abs() < EPSILON {
        let root = delta.max(0.0).sqrt();
        vec![(-q / 2.0 + root).cbrt() + (-q / 2.0 - root).cbrt()]
    } else {
        let m = 2.0 * (-p / 3.0).sqrt();
        let theta = ((3.0 * q / (p * m)).clamp(-1.0, 1.0)).acos() / 3.0;
        (0..3).map(|k| m * (theta - TAU * k as f64 / 3.0).cos()).collect()
    };

    let mut roots = depressed.into_iter()
        .map(|t| polish(t - shift, [a, b, c, d]))
        .filter(|x| x.is_finite())
        .collect::<Vec<_>>();
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|x, y| (*x - *y).abs() < DISTINCT_ROOT_TOLERANCE);
    roots
}

/// Solves `ax^3 + bx^2 + cx + d = 0` for its distinct real roots, stored in ascending order as
/// `x_1`, `x_2` and `x_3`. Requires `a`, `b`, `c` and `d`, with `a != 0`.
pub fn solve_cubic(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    let coefficients = ["a", "b", "c", "d"].map(|name| known(inputs, name));
    let [Some(a), Some(b), Some(c), Some(d)] = coefficients else {
        log::debug!("cubic needs a, b, c and d");
        return SolverResult::new();
    };
    if a == 0.0 {
        log::debug!("cubic with a = 0 is not a cubic");
        return SolverResult::new();
    }

    real_roots(a, b, c, d)
        .into_iter()
        .enumerate()
        .map(|(i, x)| (format!("x_{}", i + 1), convert_to_exact(x, settings)))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::number::ExactNumber;
    use pretty_assertions::assert_eq;
    use super::super::inputs;
    use super::*;

    fn solve(a: f64, b: f64, c: f64, d: f64) -> SolverResult {
        solve_cubic(&inputs(&[("a", a), ("b", b), ("c", c), ("d", d)]), None)
    }

    #[test]
    fn three_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let results = solve(1.0, -6.0, 11.0, -6.0);
        assert_eq!(results["x_1"], ExactNumber::integer(1));
        assert_eq!(results["x_2"], ExactNumber::integer(2));
        assert_eq!(results["x_3"], ExactNumber::integer(3));
    }

    #[test]
    fn one_real_root() {
        let results = solve(1.0, 0.0, 0.0, -8.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results["x_1"], ExactNumber::integer(2));
    }

    #[test]
    fn repeated_roots() {
        // (x - 1)^2 (x + 2)
        let results = solve(1.0, 0.0, -3.0, 2.0);
        assert_eq!(results.len(), 2);
        assert_eq!(results["x_1"], ExactNumber::integer(-2));
        assert_eq!(results["x_2"], ExactNumber::integer(1));

        let results = solve(2.0, 0.0, 0.0, 0.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results["x_1"], ExactNumber::integer(0));
    }

    #[test]
    fn exact_roots() {
        // (2x - 1)(x^2 - 2)
        let results = solve(2.0, -1.0, -4.0, 2.0);
        assert_eq!(results["x_1"].latex(), "-\\sqrt{2}");
        assert_eq!(results["x_2"].latex(), "\\frac{1}{2}");
        assert_eq!(results["x_3"].latex(), "\\sqrt{2}");
    }

    #[test]
    fn insufficient_data() {
        assert!(solve(0.0, 1.0, 1.0, 1.0).is_empty());
        assert!(solve_cubic(&inputs(&[("a", 1.0)]), None).is_empty());
    }
}
