use crate::parser::{ast::expr::Expr, error::{kind, Error}, Parse, Parser};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the innermost expression in the parenthesized expression.
    pub fn innermost(&self) -> &Expr {
        let mut inner = &*self.expr;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen],
                found: open.kind,
            }));
        }

        let expr = input.try_parse::<Expr>()?;
        match input.next_token() {
            Ok(close) if close.kind == TokenKind::CloseParen => Ok(Self {
                expr: Box::new(expr),
                span: open.span.start..close.span.end,
            }),
            _ => Err(Error::new_fatal(vec![open.span], kind::UnclosedParenthesis)),
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
