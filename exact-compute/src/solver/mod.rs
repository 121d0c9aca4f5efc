//! Equation solvers.
//!
//! Each solver takes the known variables of an equation as decimals and derives as many of the
//! missing ones as it can, converting each result to its exact form. Solvers never fail: missing
//! or contradictory data gives an empty or partial [`SolverResult`].
//!
//! [`solve`] dispatches an [`Equation`] from the catalog to the solver named by its
//! [`SolverType`].

pub mod catalog;
mod cubic;
mod geometric;
mod linear;
mod quadratic;
mod suvat;

pub use catalog::{Equation, EquationExample, SolverConfig, SolverType, Variable};
pub use cubic::solve_cubic;
pub use geometric::solve_geometric;
pub use linear::solve_linear;
pub use quadratic::{create_casio_quadratic_solution, solve_quadratic};
pub use suvat::solve_suvat;

use crate::fmt::FormatSettings;
use crate::number::ExactNumber;
use std::collections::{BTreeMap, HashMap};

/// The known variables given to a solver, by symbol.
pub type Inputs = HashMap<String, f64>;

/// The variables derived by a solver, by symbol.
pub type SolverResult = BTreeMap<String, ExactNumber>;

/// Returns the value of a known variable. Non-finite values are treated as unknown.
pub(crate) fn known(inputs: &Inputs, name: &str) -> Option<f64> {
    inputs.get(name).copied().filter(|value| value.is_finite())
}

/// Solves an equation from the catalog with the solver named by its [`SolverType`].
///
/// The result only contains variables that the equation declares and that were not given.
/// Configuration that does not fit the solver, and unknown solver types, are logged as warnings
/// and give an empty result.
pub fn solve(equation: &Equation, inputs: &Inputs, settings: Option<&FormatSettings>) -> SolverResult {
    let config = equation.solver_config.as_ref();
    let results = match (&equation.solver_type, config) {
        (SolverType::Linear | SolverType::Physics, Some(SolverConfig::Formulas(formulas))) => {
            solve_linear(formulas, inputs, settings)
        },
        (SolverType::Quadratic, _) => solve_quadratic(inputs, settings),
        (SolverType::Cubic, _) => solve_cubic(inputs, settings),
        (SolverType::Geometric, Some(SolverConfig::Name(formula))) => {
            solve_geometric(formula, inputs, settings)
        },
        (SolverType::Suvat, _) => solve_suvat(inputs, settings),
        (SolverType::Custom(name), _) => {
            log::warn!("`{}` has an unknown solver type `{}`", equation.id, name);
            SolverResult::new()
        },
        (solver_type, config) => {
            log::warn!(
                "`{}` has a {} solver with unsuitable configuration {:?}",
                equation.id,
                solver_type,
                config,
            );
            SolverResult::new()
        },
    };

    results.into_iter()
        .filter(|(symbol, _)| equation.declares(symbol) && known(inputs, symbol).is_none())
        .collect()
}

/// Builds solver inputs from pairs.
#[cfg(test)]
fn inputs(pairs: &[(&str, f64)]) -> Inputs {
    pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn formulas(pairs: &[(&str, &str)]) -> Option<SolverConfig> {
        let map = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Some(SolverConfig::Formulas(map))
    }

    #[test]
    fn linear_equation() {
        let ohm = Equation::new(
            "ohm",
            ["V", "I", "R"],
            SolverType::Linear,
            formulas(&[("V", "I * R"), ("I", "V / R"), ("R", "V / I")]),
        );
        let results = solve(&ohm, &inputs(&[("V", 12.0), ("R", 4.0)]), None);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["I"]);
        assert_eq!(results["I"], ExactNumber::integer(3));
    }

    #[test]
    fn physics_with_formulas() {
        let power = Equation::new(
            "power",
            ["P", "W", "t"],
            SolverType::Physics,
            formulas(&[("P", "W / t"), ("W", "P * t"), ("t", "W / P")]),
        );
        let results = solve(&power, &inputs(&[("W", 100.0), ("t", 8.0)]), None);
        assert_eq!(results["P"].latex(), "\\frac{25}{2}");
    }

    #[test]
    fn geometric_equation() {
        let circle = Equation::new(
            "circle",
            ["A", "r"],
            SolverType::Geometric,
            Some(SolverConfig::Name("circle_area".to_string())),
        );
        let results = solve(&circle, &inputs(&[("r", 3.0)]), None);
        assert_eq!(results["A"].latex(), "9\\pi");
    }

    #[test]
    fn filters_undeclared_variables() {
        let roots = Equation::new("roots", ["a", "b", "c", "x_1", "x_2"], SolverType::Quadratic, None);
        let results = solve(&roots, &inputs(&[("a", 1.0), ("b", -3.0), ("c", 2.0)]), None);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["x_1", "x_2"]);
    }

    #[test]
    fn suvat_equation() {
        let motion = Equation::new("motion", ["s", "u", "v", "a", "t"], SolverType::Suvat, None);
        let results = solve(&motion, &inputs(&[("s", 100.0), ("u", 0.0), ("v", 20.0)]), None);
        assert_eq!(results["a"], ExactNumber::integer(2));
        assert_eq!(results["t"], ExactNumber::integer(10));
    }

    #[test]
    fn cubic_equation() {
        let cubic = Equation::new("cubic", ["a", "b", "c", "d", "x_1", "x_2", "x_3"], SolverType::Cubic, None);
        let results = solve(&cubic, &inputs(&[("a", 1.0), ("b", 0.0), ("c", -1.0), ("d", 0.0)]), None);
        assert_eq!(results["x_1"], ExactNumber::integer(-1));
        assert_eq!(results["x_2"], ExactNumber::integer(0));
        assert_eq!(results["x_3"], ExactNumber::integer(1));
    }

    #[test]
    fn mismatched_configuration() {
        let linear = Equation::new("broken", ["x", "y"], SolverType::Linear, None);
        assert!(solve(&linear, &inputs(&[("x", 1.0)]), None).is_empty());

        let geometric = Equation::new("broken", ["A", "r"], SolverType::Geometric, formulas(&[("A", "r")]));
        assert!(solve(&geometric, &inputs(&[("r", 1.0)]), None).is_empty());

        let custom = Equation::new("matrix", ["x"], "matrix".parse().unwrap(), None);
        assert!(solve(&custom, &inputs(&[]), None).is_empty());
    }
}
