//! Builtin functions available to expressions.

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A builtin function over real numbers.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name of the function.
    pub name: &'static str,

    /// The minimum number of arguments.
    pub min_args: usize,

    /// The maximum number of arguments.
    pub max_args: usize,

    /// The implementation. The argument count is checked before this is called.
    eval: fn(&[f64]) -> f64,
}

impl Builtin {
    const fn unary(name: &'static str, eval: fn(&[f64]) -> f64) -> Self {
        Self { name, min_args: 1, max_args: 1, eval }
    }

    /// Returns true if the function accepts the given number of arguments.
    pub fn accepts(&self, given: usize) -> bool {
        (self.min_args..=self.max_args).contains(&given)
    }

    /// A description of the accepted number of arguments, for error messages.
    pub fn arity(&self) -> String {
        if self.min_args == self.max_args {
            self.min_args.to_string()
        } else {
            format!("{} or {}", self.min_args, self.max_args)
        }
    }

    /// Calls the function.
    pub fn call(&self, args: &[f64]) -> f64 {
        (self.eval)(args)
    }
}

fn log(args: &[f64]) -> f64 {
    match args {
        [x] => x.log10(),
        [x, base] => x.log(*base),
        _ => f64::NAN,
    }
}

/// Every builtin function, by name.
pub static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    [
        Builtin::unary("sqrt", |a| a[0].sqrt()),
        Builtin::unary("rt", |a| a[0].sqrt()),
        Builtin::unary("cbrt", |a| a[0].cbrt()),
        Builtin::unary("abs", |a| a[0].abs()),
        Builtin::unary("exp", |a| a[0].exp()),
        Builtin::unary("ln", |a| a[0].ln()),
        Builtin { name: "log", min_args: 1, max_args: 2, eval: log },
        Builtin::unary("sin", |a| a[0].sin()),
        Builtin::unary("cos", |a| a[0].cos()),
        Builtin::unary("tan", |a| a[0].tan()),
        Builtin::unary("asin", |a| a[0].asin()),
        Builtin::unary("acos", |a| a[0].acos()),
        Builtin::unary("atan", |a| a[0].atan()),
    ]
    .into_iter()
    .map(|builtin| (builtin.name, builtin))
    .collect()
});

/// Returns the builtin function with the given name.
pub fn get_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

/// Returns the names of all builtin functions with a name similar to the given name, sorted.
pub fn similar_builtins(name: &str) -> Vec<String> {
    let mut names = BUILTINS.keys()
        .filter(|n| levenshtein(n, name) < 2)
        .map(|n| n.to_string())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity() {
        let log = get_builtin("log").unwrap();
        assert!(log.accepts(1));
        assert!(log.accepts(2));
        assert!(!log.accepts(3));
        assert_eq!(log.arity(), "1 or 2");
        assert_eq!(get_builtin("sqrt").unwrap().arity(), "1");
    }

    #[test]
    fn logarithms() {
        let log = get_builtin("log").unwrap();
        assert!((log.call(&[1000.0]) - 3.0).abs() < 1e-12);
        assert!((log.call(&[8.0, 2.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn suggestions() {
        assert_eq!(similar_builtins("sqr"), vec!["sqrt"]);
        assert_eq!(similar_builtins("co"), vec!["cos"]);
        assert!(similar_builtins("factorial").is_empty());
    }
}
