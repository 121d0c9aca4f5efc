use crate::parser::{
    ast::{expr::Expr, unary},
    error::Error,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Looks at the next token to find the operator that would follow an operand ending at
    /// `lhs_end`, without consuming anything.
    ///
    /// A name or an opening parenthesis directly after an operand is implicit multiplication, as
    /// in `2x` or `3(x + 1)`.
    fn peek_op(input: &Parser, lhs_end: usize) -> Option<BinOp> {
        let token = input.peek_token()?;
        let kind = match token.kind {
            TokenKind::Exp => BinOpKind::Exp,
            TokenKind::Mul => BinOpKind::Mul,
            TokenKind::Div => BinOpKind::Div,
            TokenKind::Add => BinOpKind::Add,
            TokenKind::Sub => BinOpKind::Sub,
            TokenKind::Name | TokenKind::OpenParen => return Some(BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: lhs_end..token.span.start,
            }),
            _ => return None,
        };

        Some(BinOp {
            kind,
            implicit: false,
            span: token.span.clone(),
        })
    }

    /// Parses binary operations following `lhs` whose precedence is at least `precedence`, using
    /// precedence climbing.
    pub(crate) fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        while let Some(op) = Self::peek_op(input, lhs.span().end) {
            if op.precedence() < precedence {
                break;
            }

            if !op.implicit {
                input.next_token()?;
            }

            let mut rhs = unary::parse_operand(input)?;

            // before creating the `lhs op rhs` node, check whether the following operator should
            // take `rhs` as its own left operand instead, as in `3 + 4 * 5` or `2 ^ 3 ^ 2`
            while let Some(next_op) = Self::peek_op(input, rhs.span().end) {
                let binds_tighter = next_op.precedence() > op.precedence()
                    || (next_op.precedence() == op.precedence()
                        && next_op.associativity() == Associativity::Right);
                if !binds_tighter {
                    break;
                }
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.implicit {
            return write!(f, "{}{}", self.lhs, self.rhs);
        }

        let op = match self.op.kind {
            BinOpKind::Exp => "^",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
        };
        write!(f, "{} {} {}", self.lhs, op, self.rhs)
    }
}
