use crate::convert::convert_to_exact;
use crate::fmt::FormatSettings;
use crate::numerical::{Ctxt, Eval};
use exact_parser::parser::{ast::Expr, Parser};
use super::{known, Inputs, SolverResult};

/// Solves an equation given one formula per derivable variable, such as
/// `{"V": "I * R", "I": "V / R", "R": "V / I"}`.
///
/// Each variable that is not already known is computed by substituting the known values into its
/// formula. Variables whose formula cannot be parsed, still refers to unknown symbols, or
/// evaluates to a non-finite value are skipped with a warning.
pub fn solve_linear<I, K, V>(
    relationships: I,
    inputs: &Inputs,
    settings: Option<&FormatSettings>,
) -> SolverResult
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let ctxt = Ctxt::with_vars(
        inputs.keys().filter_map(|name| Some((name.as_str(), known(inputs, name)?)))
    );

    let mut results = SolverResult::new();
    for (variable, formula) in relationships {
        let (variable, formula) = (variable.as_ref(), formula.as_ref());
        if known(inputs, variable).is_some() {
            continue;
        }

        let expr = match Parser::new(formula).try_parse_full::<Expr>() {
            Ok(expr) => expr,
            Err(err) => {
                log::warn!("cannot parse the formula for `{}` (`{}`): {}", variable, formula, err.message());
                continue;
            },
        };

        let unresolved = ctxt.unresolved_symbols(&expr);
        if !unresolved.is_empty() {
            log::warn!(
                "cannot solve for `{}` with `{}`: unresolved symbols {}",
                variable,
                formula,
                unresolved.join(", "),
            );
            continue;
        }

        match expr.eval(&ctxt) {
            Ok(value) if value.is_finite() => {
                results.insert(variable.to_string(), convert_to_exact(value, settings));
            },
            Ok(value) => log::warn!("`{}` evaluated to {} with `{}`", variable, value, formula),
            Err(err) => log::warn!("cannot evaluate the formula for `{}`: {}", variable, err.message()),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use crate::number::{ExactNumber, NumberType};
    use pretty_assertions::assert_eq;
    use super::super::inputs;
    use super::*;

    const OHM: [(&str, &str); 3] = [("V", "I * R"), ("I", "V / R"), ("R", "V / I")];

    #[test]
    fn ohms_law() {
        let results = solve_linear(OHM, &inputs(&[("V", 12.0), ("R", 4.0)]), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results["I"].value(), 3.0);
        assert_eq!(results["I"].number_type(), NumberType::Integer);
    }

    #[test]
    fn exact_results() {
        let results = solve_linear(OHM, &inputs(&[("V", 1.0), ("R", 3.0)]), None);
        assert_eq!(results["I"].latex(), "\\frac{1}{3}");
    }

    #[test]
    fn whole_word_substitution() {
        let relationships = [("E", "m * c ^ 2"), ("m", "E / c ^ 2")];
        let results = solve_linear(relationships, &inputs(&[("m", 2.0), ("c", 3.0)]), None);
        assert_eq!(results["E"], ExactNumber::integer(18));
    }

    #[test]
    fn skips_unresolved_formulas() {
        let results = solve_linear(OHM, &inputs(&[("V", 12.0)]), None);
        assert!(results.is_empty());
    }

    #[test]
    fn skips_non_finite_and_malformed_formulas() {
        let results = solve_linear(OHM, &inputs(&[("V", 12.0), ("R", 0.0)]), None);
        assert!(results.is_empty());

        let relationships = [("x", "2 * (y"), ("z", "y + 1")];
        let results = solve_linear(relationships, &inputs(&[("y", 1.0)]), None);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["z"]);
    }

    #[test]
    fn ignores_non_finite_inputs() {
        let results = solve_linear(OHM, &inputs(&[("V", f64::NAN), ("I", 2.0), ("R", 3.0)]), None);
        assert_eq!(results["V"], ExactNumber::integer(6));
    }
}
