use ariadne::{Fmt, Source};
use exact_attrs::ErrorKind;
use exact_error::{Error, EXPR};
use std::ops::Range;

/// The command does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", self.name),
    labels = ["this command"],
    help = format!("type {} for a list of commands", ":help".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The name of the command, without the leading colon.
    pub name: String,
}

/// The command was given the wrong arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong arguments for `:{}`", self.name),
    labels = ["this command"],
    help = format!("usage: {}", self.usage.fg(EXPR)),
)]
pub struct Usage {
    /// The name of the command, without the leading colon.
    pub name: &'static str,

    /// How the command is used.
    pub usage: &'static str,
}

/// An argument that should look like `name=value` does not.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an assignment",
    labels = ["this argument"],
    help = format!("write known values as {}", "name=value".fg(EXPR)),
)]
pub struct ExpectedAssignment;

/// A value in an assignment or argument list could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number: {}", self.text, self.reason),
    labels = ["this value"],
)]
pub struct InvalidValue {
    /// The text of the value.
    pub text: String,

    /// Why the value is invalid.
    pub reason: String,
}

/// Moves the spans of an error that was produced from a slice of the input, so that they point
/// into the whole input.
pub fn offset(mut err: Error, offset: usize) -> Error {
    err.spans = err.spans
        .into_iter()
        .map(|span: Range<usize>| span.start + offset..span.end + offset)
        .collect();
    err
}

/// Report the error to stderr.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
pub fn report_to_stderr(err: &Error, input: &str) {
    let report = err.build_report("input");
    if let Err(io_err) = report.eprint(("input", Source::from(input))) {
        eprintln!("{} ({})", err, io_err);
    }
}
