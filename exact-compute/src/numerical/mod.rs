//! Numerical evaluation of arithmetic expressions over `f64`.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod func;

pub use ctxt::Ctxt;
pub use eval::Eval;
pub use exact_error::Error;

use exact_parser::parser::{ast::Expr, Parser};

/// Parses and evaluates the given source in the given context.
pub fn eval_str(source: &str, ctxt: &Ctxt) -> Result<f64, Error> {
    let expr = Parser::new(source).try_parse_full::<Expr>()?;
    expr.eval(ctxt)
}
