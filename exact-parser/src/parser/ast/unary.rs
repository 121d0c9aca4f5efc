use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    error::Error,
    token::op::{UnaryOp, UnaryOpKind},
    Parse,
    Parser,
    Precedence,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parses the operand of a binary operator: a prefix unary expression if the next token is a sign,
/// otherwise a primary expression.
pub(crate) fn parse_operand(input: &mut Parser) -> Result<Expr, Error> {
    match input.peek_token().map(|token| token.kind) {
        Some(TokenKind::Sub | TokenKind::Add) => input.try_parse::<Unary>().map(Expr::Unary),
        _ => Primary::parse(input),
    }
}

/// A prefix unary expression, such as `-x`. Negation binds looser than exponentiation, so `-2^2`
/// is `-(2^2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand = parse_operand(input)?;

        // only operators of higher precedence than negation may bind to the operand
        let operand = Binary::parse_expr(input, operand, Precedence::Exp)?;
        Ok(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.kind {
            UnaryOpKind::Neg => write!(f, "-{}", self.operand),
            UnaryOpKind::Pos => write!(f, "+{}", self.operand),
        }
    }
}
