use exact_parser::parser::ast::Expr;
use levenshtein::levenshtein;
use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};
use super::func::get_builtin;

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// The default context defines the constants `pi`, `e` and `tau`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    fn default() -> Self {
        let vars = [("pi", PI), ("e", E), ("tau", TAU)]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Self { vars }
    }
}

impl Ctxt {
    /// Creates a context containing the constants, plus the given variables. Variables named
    /// after a constant shadow it.
    pub fn with_vars<'a>(vars: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut ctxt = Self::default();
        for (name, value) in vars {
            ctxt.add_var(name, value);
        }
        ctxt
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns all variables in the context with a name similar to the given name, sorted.
    pub fn get_similar_vars(&self, name: &str) -> Vec<String> {
        let mut names = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Returns the symbols referenced by the expression that this context cannot resolve, in
    /// order of appearance and without duplicates. Unknown function names follow the symbols.
    pub fn unresolved_symbols<'a>(&self, expr: &'a Expr) -> Vec<&'a str> {
        let mut unresolved = Vec::new();
        for name in expr.symbols().into_iter().chain(expr.functions()) {
            let known = self.vars.contains_key(name) || get_builtin(name).is_some();
            if !known && !unresolved.contains(&name) {
                unresolved.push(name);
            }
        }
        unresolved
    }
}
