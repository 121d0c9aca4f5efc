use exact_attrs::ErrorKind;

/// The input was empty or only contained whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "Input cannot be empty")]
pub struct EmptyInput;

/// An explicit fraction has a denominator of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Division by zero",
    labels = ["this denominator is zero"],
)]
pub struct DivisionByZero;

/// A square root was taken of a negative integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Negative radicand",
    labels = ["this radicand"],
    help = "the square root of a negative number is not a real number",
)]
pub struct NegativeRadicand;

/// A general expression evaluated to infinity or NaN.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Expression did not evaluate to a finite number",
    labels = ["this expression"],
)]
pub struct NonFiniteResult;
