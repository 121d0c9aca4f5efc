//! Equation definitions, as supplied by an equation catalog.

use crate::number::ExactNumber;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A variable of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The human-readable name, such as `Voltage`.
    pub name: String,

    /// The symbol used in formulas and in solver inputs and results, such as `V`.
    pub symbol: String,

    /// The unit of the variable, such as `V` or `m/s`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: Option<String>,
}

/// Which solver an equation is solved with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "String", into = "String"))]
pub enum SolverType {
    Linear,
    Quadratic,
    Cubic,
    Geometric,
    Physics,
    Suvat,

    /// A solver type this library does not know about.
    Custom(String),
}

impl FromStr for SolverType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "linear" => SolverType::Linear,
            "quadratic" => SolverType::Quadratic,
            "cubic" => SolverType::Cubic,
            "geometric" => SolverType::Geometric,
            "physics" => SolverType::Physics,
            "suvat" => SolverType::Suvat,
            other => SolverType::Custom(other.to_string()),
        })
    }
}

impl From<String> for SolverType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(solver_type) => solver_type,
            Err(never) => match never {},
        }
    }
}

impl From<SolverType> for String {
    fn from(solver_type: SolverType) -> Self {
        solver_type.to_string()
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverType::Linear => write!(f, "linear"),
            SolverType::Quadratic => write!(f, "quadratic"),
            SolverType::Cubic => write!(f, "cubic"),
            SolverType::Geometric => write!(f, "geometric"),
            SolverType::Physics => write!(f, "physics"),
            SolverType::Suvat => write!(f, "suvat"),
            SolverType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Solver-specific configuration of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum SolverConfig {
    /// One formula per derivable variable, such as `{"I": "V / R", "R": "V / I"}`.
    Formulas(BTreeMap<String, String>),

    /// The name of a built-in formula, such as `circle_area`, or free text.
    Name(String),
}

/// A worked example attached to an equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct EquationExample {
    /// The known variables.
    pub input: BTreeMap<String, f64>,

    /// The variables the solver is expected to derive from them.
    pub expected_output: BTreeMap<String, ExactNumber>,
}

/// An equation from the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    pub id: String,
    pub name: String,
    pub category: String,

    /// The LaTeX source of the equation, for display.
    pub latex: String,
    pub description: String,
    pub variables: Vec<Variable>,
    pub solver_type: SolverType,

    #[cfg_attr(feature = "serde", serde(default))]
    pub solver_config: Option<SolverConfig>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub examples: Vec<EquationExample>,
}

impl Equation {
    /// Creates an equation with the given variable symbols and solver, leaving the descriptive
    /// fields empty.
    pub fn new<'a>(
        id: &str,
        symbols: impl IntoIterator<Item = &'a str>,
        solver_type: SolverType,
        solver_config: Option<SolverConfig>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            category: String::new(),
            latex: String::new(),
            description: String::new(),
            variables: symbols.into_iter()
                .map(|symbol| Variable {
                    name: symbol.to_string(),
                    symbol: symbol.to_string(),
                    unit: None,
                })
                .collect(),
            solver_type,
            solver_config,
            examples: Vec::new(),
        }
    }

    /// Returns true if the equation declares a variable with the given symbol.
    pub fn declares(&self, symbol: &str) -> bool {
        self.variables.iter().any(|v| v.symbol == symbol)
    }
}
