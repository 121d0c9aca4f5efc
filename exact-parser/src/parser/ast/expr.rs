use crate::parser::{
    ast::{binary::Binary, call::Call, literal::Literal, paren::Paren, unary::{self, Unary}},
    error::Error,
    Parse,
    Parser,
    Precedence,
};
use crate::try_parse_catch_fatal;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sqrt(2)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
        }
    }

    /// Returns the names of every symbol referenced in this expression, in
    /// source order. Function names are not included.
    pub fn symbols(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    /// Returns the names of every function called in this expression, in source order.
    pub fn functions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_functions(&mut out);
        out
    }

    fn collect_functions<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(_) => (),
            Expr::Paren(paren) => paren.expr.collect_functions(out),
            Expr::Call(call) => {
                out.push(&call.name.name);
                call.args.iter().for_each(|arg| arg.collect_functions(out));
            },
            Expr::Unary(unary) => unary.operand.collect_functions(out),
            Expr::Binary(binary) => {
                binary.lhs.collect_functions(out);
                binary.rhs.collect_functions(out);
            },
        }
    }

    fn collect_symbols<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(Literal::Symbol(sym)) => out.push(&sym.name),
            Expr::Literal(Literal::Number(_)) => (),
            Expr::Paren(paren) => paren.expr.collect_symbols(out),
            Expr::Call(call) => call.args.iter().for_each(|arg| arg.collect_symbols(out)),
            Expr::Unary(unary) => unary.operand.collect_symbols(out),
            Expr::Binary(binary) => {
                binary.lhs.collect_symbols(out);
                binary.rhs.collect_symbols(out);
            },
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let operand = unary::parse_operand(input)?;
        Binary::parse_expr(input, operand, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// A primary expression: the operand of unary and binary operators.
pub struct Primary;

impl Primary {
    /// Parses a function call, parenthesized expression or literal, in that order.
    pub fn parse(input: &mut Parser) -> Result<Expr, Error> {
        Err(try_parse_catch_fatal!(
            input.try_parse::<Call>().map(Expr::Call),
            input.try_parse::<Paren>().map(Expr::Paren),
            input.try_parse::<Literal>().map(Expr::Literal),
        ))
    }
}
