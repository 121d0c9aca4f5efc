mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `exact_error::ErrorKind` trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use exact_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("the radicand `{}` is negative", self.radicand),
///     labels = ["this square root"],
///     help = "only real square roots are supported",
/// )]
/// pub struct NegativeRadicand {
///     pub radicand: i64,
/// }
/// ```
///
/// | Tag       | Description                                                                       |
/// | --------- | --------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report, and returned by `message()`.      |
/// | `labels`  | An array of label texts, one for each span of the error, in order.                |
/// | `help`    | Optional help text describing what the user can do to fix the error.              |
///
/// Each tag accepts an expression; `self` is in scope, so fields can be used in the expression.
/// The deriving crate must depend on `ariadne` and `exact-error`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}
