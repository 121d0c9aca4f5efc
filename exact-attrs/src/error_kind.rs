use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Generics,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parses the next `tag = expr` pair in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match ident.to_string().as_str() {
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub generics: Generics,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // outer attributes include documentation as well as the `error` attribute
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let mut error_args = ErrorArgs::default();
        for attr in &attributes {
            if attr.path().is_ident("error") {
                error_args = attr.parse_args::<ErrorArgs>()?;
                break;
            }
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            generics: item.generics,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let Some(message) = self.error_args.message.as_ref() else {
            tokens.extend(quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` requires a `message` tag in the `error` attribute");
            });
            return;
        };

        let labels = self.error_args.labels
            .as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { ::std::vec::Vec::<::std::string::String>::new() });
        let help = self.error_args.help
            .as_ref()
            .map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            impl #impl_generics exact_error::ErrorKind for #name #ty_generics #where_clause {
                fn message(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(&#message)
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[::std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                    let offset = spans.first().map_or(0, |span| span.start);
                    let labels = ::std::iter::IntoIterator::into_iter(#labels)
                        .zip(spans.iter().cloned())
                        .map(|(label_str, span)| {
                            let label_str = ::std::string::ToString::to_string(&label_str);
                            let mut label = ariadne::Label::new((src_id, span))
                                .with_color(exact_error::EXPR);

                            if !label_str.is_empty() {
                                label = label.with_message(label_str);
                            }

                            label
                        })
                        .collect::<::std::vec::Vec<_>>();

                    #[allow(unused_mut)]
                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(exact_error::ErrorKind::message(self))
                        .with_labels(labels);

                    #help
                    builder.finish()
                }
            }
        });
    }
}
