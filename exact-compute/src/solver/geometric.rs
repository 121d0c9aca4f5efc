use crate::convert::{convert_to_exact, convert_with_pi};
use crate::fmt::FormatSettings;
use crate::number::ExactNumber;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::PI;
use super::{known, Inputs, SolverResult};

/// A geometric formula. Solves for whichever of its variables is missing.
type Formula = fn(&Inputs, Option<&FormatSettings>) -> SolverResult;

/// Every geometric formula, by name.
static FORMULAS: Lazy<HashMap<&'static str, Formula>> = Lazy::new(|| {
    let formulas: [(&'static str, Formula); 4] = [
        ("circle_area", circle_area),
        ("circle_circumference", circle_circumference),
        ("sphere_volume", sphere_volume),
        ("pythagoras", pythagoras),
    ];
    formulas.into_iter().collect()
});

/// Returns a single-entry result, or an empty one if the value is not finite.
fn single(symbol: &str, value: f64, convert: impl FnOnce(f64) -> ExactNumber) -> SolverResult {
    let mut results = SolverResult::new();
    if value.is_finite() {
        results.insert(symbol.to_string(), convert(value));
    } else {
        log::debug!("`{}` evaluated to {}", symbol, value);
    }
    results
}

/// `A = pi r^2`
fn circle_area(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    match (known(inputs, "A"), known(inputs, "r")) {
        (None, Some(r)) => single("A", PI * r * r, |v| convert_with_pi(v, settings)),
        (Some(area), None) => single("r", (area / PI).sqrt(), |v| convert_to_exact(v, settings)),
        _ => SolverResult::new(),
    }
}

/// `C = 2 pi r`
fn circle_circumference(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    match (known(inputs, "C"), known(inputs, "r")) {
        (None, Some(r)) => single("C", 2.0 * PI * r, |v| convert_with_pi(v, settings)),
        (Some(c), None) => single("r", c / (2.0 * PI), |v| convert_to_exact(v, settings)),
        _ => SolverResult::new(),
    }
}

/// `V = 4/3 pi r^3`
fn sphere_volume(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    match (known(inputs, "V"), known(inputs, "r")) {
        (None, Some(r)) => single("V", 4.0 / 3.0 * PI * r.powi(3), |v| convert_with_pi(v, settings)),
        (Some(volume), None) => {
            single("r", (3.0 * volume / (4.0 * PI)).cbrt(), |v| convert_to_exact(v, settings))
        },
        _ => SolverResult::new(),
    }
}

/// `a^2 + b^2 = c^2`, where `c` is the hypotenuse.
fn pythagoras(inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    let convert = |v| convert_to_exact(v, settings);
    match (known(inputs, "a"), known(inputs, "b"), known(inputs, "c")) {
        (Some(a), Some(b), None) => single("c", (a * a + b * b).sqrt(), convert),
        (Some(a), None, Some(c)) => single("b", (c * c - a * a).sqrt(), convert),
        (None, Some(b), Some(c)) => single("a", (c * c - b * b).sqrt(), convert),
        _ => SolverResult::new(),
    }
}

/// Returns the names of the formulas with a name similar to the given name, sorted.
fn similar_formulas(name: &str) -> Vec<&'static str> {
    let mut names = FORMULAS.keys()
        .filter(|n| levenshtein(n, name) < 4)
        .copied()
        .collect::<Vec<_>>();
    names.sort();
    names
}

/// Solves a named geometric formula for its missing variable:
///
/// | Name                   | Variables         |
/// | ---------------------- | ----------------- |
/// | `circle_area`          | `A`, `r`          |
/// | `circle_circumference` | `C`, `r`          |
/// | `sphere_volume`        | `V`, `r`          |
/// | `pythagoras`           | `a`, `b`, `c`     |
///
/// Results that are a multiple of π (areas, circumferences and volumes) are converted with
/// [`convert_with_pi`]. Unknown formula names produce an empty result and a warning.
pub fn solve_geometric(formula: &str, inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    match FORMULAS.get(formula) {
        Some(solve) => solve(inputs, settings),
        None => {
            let suggestions = similar_formulas(formula);
            if suggestions.is_empty() {
                log::warn!("unknown geometric formula `{}`", formula);
            } else {
                log::warn!("unknown geometric formula `{}`; did you mean {}?", formula, suggestions.join(", "));
            }
            SolverResult::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::number::NumberType;
    use pretty_assertions::assert_eq;
    use super::super::inputs;
    use super::*;

    #[test]
    fn circle_area_from_radius() {
        let results = solve_geometric("circle_area", &inputs(&[("r", 3.0)]), None);
        assert_eq!(results["A"].latex(), "9\\pi");
        assert_float_relative_eq!(results["A"].value(), 28.274333882308138);
        assert_eq!(results["A"].number_type(), NumberType::Expression);
    }

    #[test]
    fn circle_radius_from_area() {
        let results = solve_geometric("circle_area", &inputs(&[("A", 4.0 * PI)]), None);
        assert_eq!(results["r"], ExactNumber::integer(2));
    }

    #[test]
    fn circumference() {
        let results = solve_geometric("circle_circumference", &inputs(&[("r", 0.5)]), None);
        assert_eq!(results["C"].latex(), "\\pi");

        let results = solve_geometric("circle_circumference", &inputs(&[("C", 10.0 * PI)]), None);
        assert_eq!(results["r"], ExactNumber::integer(5));
    }

    #[test]
    fn sphere() {
        let results = solve_geometric("sphere_volume", &inputs(&[("r", 3.0)]), None);
        assert_eq!(results["V"].latex(), "36\\pi");

        let results = solve_geometric("sphere_volume", &inputs(&[("r", 1.0)]), None);
        assert_eq!(results["V"].latex(), "\\frac{4\\pi}{3}");

        let results = solve_geometric("sphere_volume", &inputs(&[("V", 36.0 * PI)]), None);
        assert_eq!(results["r"], ExactNumber::integer(3));
    }

    #[test]
    fn pythagorean_sides() {
        let results = solve_geometric("pythagoras", &inputs(&[("a", 3.0), ("b", 4.0)]), None);
        assert_eq!(results["c"], ExactNumber::integer(5));

        let results = solve_geometric("pythagoras", &inputs(&[("a", 1.0), ("b", 1.0)]), None);
        assert_eq!(results["c"].latex(), "\\sqrt{2}");

        let results = solve_geometric("pythagoras", &inputs(&[("b", 12.0), ("c", 13.0)]), None);
        assert_eq!(results["a"], ExactNumber::integer(5));
    }

    #[test]
    fn impossible_triangle() {
        let results = solve_geometric("pythagoras", &inputs(&[("a", 5.0), ("c", 3.0)]), None);
        assert!(results.is_empty());
    }

    #[test]
    fn nothing_to_solve() {
        assert!(solve_geometric("circle_area", &inputs(&[]), None).is_empty());
        assert!(solve_geometric("circle_area", &inputs(&[("A", 1.0), ("r", 1.0)]), None).is_empty());
    }

    #[test]
    fn unknown_formula() {
        assert!(solve_geometric("cube_volume", &inputs(&[("r", 1.0)]), None).is_empty());
        assert_eq!(similar_formulas("circle_aera"), vec!["circle_area"]);
    }
}
