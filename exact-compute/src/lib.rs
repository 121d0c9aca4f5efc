//! Exact number engine for equation solving.
//!
//! Solvers produce plain `f64` results, which this crate turns into the representation a person
//! would write down: an integer, a reduced fraction, a simplified surd such as `3\sqrt{2}`, or a
//! rational multiple of π. Every [`ExactNumber`] carries a pre-rendered LaTeX string alongside its
//! decimal value.
//!
//! The crate is organised leaf-first:
//!
//! - [`exact`]: fraction / surd arithmetic and the decimal-to-fraction / decimal-to-surd searches.
//! - [`convert`]: the priority chain that picks the best exact form for a decimal.
//! - [`fmt`]: decimal-place and significant-figure formatting, for display text and LaTeX.
//! - [`numerical`]: evaluation of parsed arithmetic expressions over `f64`.
//! - [`input`]: the free-text number input parser.
//! - [`solver`]: per-equation-family solvers and the catalog dispatcher.
//!
//! All functions are pure; nothing here holds state between calls.

pub mod consts;
pub mod convert;
pub mod exact;
pub mod fmt;
pub mod input;
pub mod latex;
pub mod number;
pub mod numerical;
pub mod solver;

pub use convert::{convert_quadratic_results, convert_rational, convert_to_exact, convert_with_pi};
pub use fmt::{FormatSettings, FormatSettingsBuilder, NumberFormat};
pub use input::{parse_input, DetectedFormat, ParsedInput};
pub use number::{Exact, ExactNumber, Expression, NumberType, QuadraticSurd};
pub use solver::{solve, Inputs, SolverResult};
