use ariadne::Fmt;
use exact_attrs::ErrorKind;
use exact_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = format!("add a closing parenthesis `{}` somewhere after this", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// The arguments of a function call were not separated or closed properly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed argument list",
    labels = ["this function call"],
    help = format!("separate arguments with `{}` and close the call with `{}`", ",".fg(EXPR), ")".fg(EXPR)),
)]
pub struct MalformedArguments;
