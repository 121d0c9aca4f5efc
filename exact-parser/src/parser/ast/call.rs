use crate::parser::{
    ast::{expr::Expr, literal::LitSym},
    error::{kind, Error},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sqrt(2)` or `log(8, 2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open = input.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen],
                found: open.kind,
            }));
        }

        // from here on, the input can only be a call
        let start = name.span.start;
        let malformed = move |end: usize| Error::new_fatal(
            vec![start..end],
            kind::MalformedArguments,
        );

        let mut args = Vec::new();
        if input.peek_token().is_some_and(|token| token.kind == TokenKind::CloseParen) {
            let close = input.next_token()?;
            return Ok(Self {
                span: name.span.start..close.span.end,
                paren_span: open.span.start..close.span.end,
                name,
                args,
            });
        }

        loop {
            let arg = match input.try_parse::<Expr>() {
                Ok(arg) => arg,
                Err(err) if err.fatal => return Err(err),
                Err(_) => return Err(malformed(input.span().end)),
            };
            args.push(arg);

            let Ok(token) = input.next_token() else {
                return Err(malformed(input.eof_span().end));
            };
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::CloseParen => return Ok(Self {
                    span: name.span.start..token.span.end,
                    paren_span: open.span.start..token.span.end,
                    name,
                    args,
                }),
                _ => return Err(malformed(token.span.end)),
            }
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
