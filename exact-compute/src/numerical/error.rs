use ariadne::Fmt;
use exact_attrs::ErrorKind;
use exact_error::EXPR;

/// Formats a list of suggested names as a help message.
fn suggestion_help(kind: &str, suggestions: &[String]) -> String {
    match suggestions {
        [] => format!("type `:help` for a list of available {}s", kind),
        [one] => format!("did you mean `{}`?", one.as_str().fg(EXPR)),
        many => format!(
            "did you mean one of these {}s? {}",
            kind,
            many.iter()
                .map(|s| format!("`{}`", s.as_str().fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = suggestion_help("variable", &self.suggestions),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// A list of similarly named variables, if any.
    pub suggestions: Vec<String>,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = suggestion_help("function", &self.suggestions),
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", self.name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        self.name.as_str().fg(EXPR),
        self.expected,
        self.given,
    ),
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// A description of the accepted number of arguments, such as `1` or `1 or 2`.
    pub expected: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A number literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", self.lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}
