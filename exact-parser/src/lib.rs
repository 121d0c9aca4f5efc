//! Tokenizer and parser for the arithmetic expressions accepted by `exact-solve`.
//!
//! The tokenizer is used on its own by the number-input cascade in `exact-compute`, which sniffs
//! the format of the user's input from its token stream; the parser turns anything the cascade
//! does not recognize (and equation formulas such as `V / R`) into an [`Expr`] tree.
//!
//! [`Expr`]: parser::ast::expr::Expr

pub mod parser;
pub mod tokenizer;
