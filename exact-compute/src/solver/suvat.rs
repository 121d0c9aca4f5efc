use crate::convert::convert_to_exact;
use crate::fmt::FormatSettings;
use super::{known, Inputs, SolverResult};

/// The SUVAT variables, in the order they are listed.
const VARIABLES: [char; 5] = ['s', 'u', 'v', 'a', 't'];

/// The known values of the SUVAT variables. Exactly three of them are present.
#[derive(Debug, Clone, Copy)]
struct Knowns {
    s: Option<f64>,
    u: Option<f64>,
    v: Option<f64>,
    a: Option<f64>,
    t: Option<f64>,
}

/// Solves for the two missing variables. Returns [`None`] if they have no physical solution.
type Case = fn(&Knowns) -> Option<[(char, f64); 2]>;

/// Returns the smallest positive root of `ax^2 + bx + c = 0`, or of `bx + c = 0` if `a` is zero.
fn smallest_positive_root(a: f64, b: f64, c: f64) -> Option<f64> {
    let roots = if a == 0.0 {
        vec![-c / b]
    } else {
        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return None;
        }
        vec![(-b + d.sqrt()) / (2.0 * a), (-b - d.sqrt()) / (2.0 * a)]
    };

    roots.into_iter()
        .filter(|t| t.is_finite() && *t > 0.0)
        .min_by(|x, y| x.total_cmp(y))
}

/// Returns `t` if it is a valid, positive time.
fn positive_time(t: f64) -> Option<f64> {
    (t.is_finite() && t > 0.0).then_some(t)
}

/// Missing `a` and `s`: `a = (v - u) / t`, `s = (u + v) t / 2`.
fn missing_as(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (u, v, t) = (k.u?, k.v?, positive_time(k.t?)?);
    Some([('a', (v - u) / t), ('s', (u + v) * t / 2.0)])
}

/// Missing `a` and `t`: `t = 2s / (u + v)`, `a = (v^2 - u^2) / 2s`.
fn missing_at(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, u, v) = (k.s?, k.u?, k.v?);
    let t = positive_time(2.0 * s / (u + v))?;
    Some([('a', (v - u) / t), ('t', t)])
}

/// Missing `a` and `u`: `u = 2s / t - v`, `a = (v - u) / t`.
fn missing_au(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, v, t) = (k.s?, k.v?, positive_time(k.t?)?);
    let u = 2.0 * s / t - v;
    Some([('a', (v - u) / t), ('u', u)])
}

/// Missing `a` and `v`: `v = 2s / t - u`, `a = (v - u) / t`.
fn missing_av(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, u, t) = (k.s?, k.u?, positive_time(k.t?)?);
    let v = 2.0 * s / t - u;
    Some([('a', (v - u) / t), ('v', v)])
}

/// Missing `s` and `t`: `t = (v - u) / a`, `s = (u + v) t / 2`.
fn missing_st(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (u, v, a) = (k.u?, k.v?, k.a?);
    let t = positive_time((v - u) / a)?;
    Some([('s', (u + v) * t / 2.0), ('t', t)])
}

/// Missing `s` and `u`: `u = v - at`, `s = vt - at^2 / 2`.
fn missing_su(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (v, a, t) = (k.v?, k.a?, positive_time(k.t?)?);
    Some([('s', v * t - a * t * t / 2.0), ('u', v - a * t)])
}

/// Missing `s` and `v`: `v = u + at`, `s = ut + at^2 / 2`.
fn missing_sv(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (u, a, t) = (k.u?, k.a?, positive_time(k.t?)?);
    Some([('s', u * t + a * t * t / 2.0), ('v', u + a * t)])
}

/// Missing `t` and `u`: `t` solves `at^2 / 2 - vt + s = 0`, then `u = v - at`.
fn missing_tu(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, v, a) = (k.s?, k.v?, k.a?);
    let t = smallest_positive_root(a / 2.0, -v, s)?;
    Some([('t', t), ('u', v - a * t)])
}

/// Missing `t` and `v`: `t` solves `at^2 / 2 + ut - s = 0`, then `v = u + at`.
fn missing_tv(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, u, a) = (k.s?, k.u?, k.a?);
    let t = smallest_positive_root(a / 2.0, u, -s)?;
    Some([('t', t), ('v', u + a * t)])
}

/// Missing `u` and `v`: `u = s / t - at / 2`, `v = u + at`.
fn missing_uv(k: &Knowns) -> Option<[(char, f64); 2]> {
    let (s, a, t) = (k.s?, k.a?, positive_time(k.t?)?);
    let u = s / t - a * t / 2.0;
    Some([('u', u), ('v', u + a * t)])
}

/// Returns the case for the given missing pair, keyed by the two letters in alphabetical order.
fn case(key: &str) -> Option<Case> {
    Some(match key {
        "as" => missing_as,
        "at" => missing_at,
        "au" => missing_au,
        "av" => missing_av,
        "st" => missing_st,
        "su" => missing_su,
        "sv" => missing_sv,
        "tu" => missing_tu,
        "tv" => missing_tv,
        "uv" => missing_uv,
        _ => return None,
    })
}

/// Solves the constant-acceleration equations of motion for the two missing variables out of
/// displacement `s`, initial velocity `u`, final velocity `v`, acceleration `a` and time `t`.
///
/// Exactly three of the five must be known; any other number gives an empty result. When time
/// has to be found from a quadratic, the smallest positive root is used. Pairs without a
/// physical solution (such as a non-positive time) are left out entirely.
pub fn solve_suvat(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    let mut results = SolverResult::new();
    let knowns = Knowns {
        s: known(inputs, "s"),
        u: known(inputs, "u"),
        v: known(inputs, "v"),
        a: known(inputs, "a"),
        t: known(inputs, "t"),
    };
    let values = [knowns.s, knowns.u, knowns.v, knowns.a, knowns.t];

    let mut missing = VARIABLES.iter()
        .zip(values)
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    if missing.len() != 2 {
        log::debug!("suvat needs exactly 3 known variables, got {}", 5 - missing.len());
        return results;
    }
    missing.sort_unstable();
    let key = missing.iter().collect::<String>();

    let Some(case) = case(&key) else {
        log::warn!("no suvat case for missing pair `{}`", key);
        return results;
    };

    match case(&knowns) {
        Some(solved) if solved.iter().all(|(_, value)| value.is_finite()) => {
            for (name, value) in solved {
                results.insert(name.to_string(), convert_to_exact(value, settings));
            }
        },
        _ => log::debug!("no physical solution for missing `{}`", key),
    }

    results
}

#[cfg(test)]
mod tests {
    use crate::number::{ExactNumber, NumberType};
    use pretty_assertions::assert_eq;
    use super::super::inputs;
    use super::*;

    fn solve(known: &[(&str, f64)]) -> SolverResult {
        solve_suvat(&inputs(known), None)
    }

    fn values(results: &SolverResult) -> Vec<(&str, f64)> {
        results.iter().map(|(k, v)| (k.as_str(), v.value())).collect()
    }

    #[test]
    fn requires_exactly_three() {
        assert!(solve(&[("u", 0.0), ("v", 0.0)]).is_empty());
        assert!(solve(&[("s", 1.0), ("u", 0.0), ("v", 2.0), ("a", 1.0)]).is_empty());
        assert!(solve(&[]).is_empty());
    }

    #[test]
    fn missing_acceleration_and_time() {
        let results = solve(&[("s", 100.0), ("u", 0.0), ("v", 20.0)]);
        assert_eq!(results["a"].value(), 2.0);
        assert_eq!(results["t"].value(), 10.0);
        assert_eq!(results["a"].number_type(), NumberType::Integer);
        assert_eq!(results["t"].number_type(), NumberType::Integer);
    }

    #[test]
    fn missing_acceleration_and_displacement() {
        let results = solve(&[("u", 2.0), ("v", 10.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("a", 2.0), ("s", 24.0)]);
    }

    #[test]
    fn missing_acceleration_and_initial_velocity() {
        let results = solve(&[("s", 24.0), ("v", 10.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("a", 2.0), ("u", 2.0)]);
    }

    #[test]
    fn missing_acceleration_and_final_velocity() {
        let results = solve(&[("s", 24.0), ("u", 2.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("a", 2.0), ("v", 10.0)]);
    }

    #[test]
    fn missing_displacement_and_time() {
        let results = solve(&[("u", 2.0), ("v", 10.0), ("a", 2.0)]);
        assert_eq!(values(&results), vec![("s", 24.0), ("t", 4.0)]);
    }

    #[test]
    fn missing_displacement_and_initial_velocity() {
        let results = solve(&[("v", 10.0), ("a", 2.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("s", 24.0), ("u", 2.0)]);
    }

    #[test]
    fn missing_displacement_and_final_velocity() {
        let results = solve(&[("u", 2.0), ("a", 2.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("s", 24.0), ("v", 10.0)]);
    }

    #[test]
    fn missing_time_and_initial_velocity() {
        let results = solve(&[("s", 24.0), ("v", 10.0), ("a", 2.0)]);
        assert_eq!(values(&results), vec![("t", 4.0), ("u", 2.0)]);
    }

    #[test]
    fn missing_time_and_final_velocity() {
        let results = solve(&[("s", 24.0), ("u", 2.0), ("a", 2.0)]);
        assert_eq!(values(&results), vec![("t", 4.0), ("v", 10.0)]);
    }

    #[test]
    fn missing_velocities() {
        let results = solve(&[("s", 24.0), ("a", 2.0), ("t", 4.0)]);
        assert_eq!(values(&results), vec![("u", 2.0), ("v", 10.0)]);
    }

    #[test]
    fn smallest_positive_time() {
        // thrown up at 20 m/s under gravity, passing 15 m at t = 1 (rising) and t = 3 (falling)
        let results = solve(&[("s", 15.0), ("u", 20.0), ("a", -10.0)]);
        assert_eq!(results["t"], ExactNumber::integer(1));
        assert_eq!(results["v"], ExactNumber::integer(10));
    }

    #[test]
    fn zero_acceleration() {
        let results = solve(&[("s", 30.0), ("u", 5.0), ("a", 0.0)]);
        assert_eq!(values(&results), vec![("t", 6.0), ("v", 5.0)]);
    }

    #[test]
    fn no_physical_solution() {
        // never reaches 30 m when thrown up at 20 m/s
        assert!(solve(&[("s", 30.0), ("u", 20.0), ("a", -10.0)]).is_empty());

        // time would be negative
        assert!(solve(&[("u", 10.0), ("v", 2.0), ("a", 2.0)]).is_empty());

        // known time is not positive
        assert!(solve(&[("u", 2.0), ("v", 10.0), ("t", 0.0)]).is_empty());
    }

    #[test]
    fn exact_results() {
        let results = solve(&[("u", 0.0), ("v", 1.0), ("t", 3.0)]);
        assert_eq!(results["a"].latex(), "\\frac{1}{3}");
        assert_eq!(results["s"].latex(), "\\frac{3}{2}");
    }
}
