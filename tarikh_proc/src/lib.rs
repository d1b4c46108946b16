//! Attribute helpers for the optional Python bindings of `tarikh`.
//!
//! PyO3 does not support its attributes under conditional clauses
//! (<https://github.com/PyO3/pyo3/issues/780>). When the header macro of a block like `pymethods`
//! is applied through `cfg_attr`, nested markers such as `new` or `staticmethod` are not seen. The
//! macro here moves the nested markers onto each method so the whole block can be conditional.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    AttrStyle, Attribute, ImplItem, ItemImpl, Meta, Path, Token, parse::ParseStream,
    parse_macro_input, punctuated::Punctuated, token::Bracket,
};

/// Apply a `pymethods` block header and mark every method inside it.
///
/// The first argument is the block attribute (only `pymethods` is accepted), the rest are the
/// markers given to each method of the block:
///
/// ```rust,ignore
/// #[cfg_attr(feature = "py", py_attr(pymethods, new))]
/// impl Date {
///     pub fn new(year: Year, month: Month, day: Day) -> Self { todo!() }
/// }
///
/// // expands (with the feature on) to:
///
/// #[pymethods]
/// impl Date {
///     #[new]
///     pub fn new(year: Year, month: Month, day: Day) -> Self { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let arg_parser = |input: ParseStream| {
        let parent = input.parse::<Path>()?;
        input.parse::<Token![,]>()?;
        let markers = Punctuated::<Meta, Token![,]>::parse_separated_nonempty(input)?;
        Ok((parent, markers))
    };

    let (parent, markers) = parse_macro_input!(args with arg_parser);

    if !parent.is_ident("pymethods") {
        return syn::Error::new_spanned(&parent, "unsupported block attribute, expected `pymethods`")
            .to_compile_error()
            .into();
    }

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    if item_impl.trait_.is_some() {
        return syn::Error::new(Span::call_site(), "`py_attr` cannot be used on trait impls")
            .to_compile_error()
            .into();
    }

    for item in item_impl.items.iter_mut() {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        for meta in markers.iter() {
            method.attrs.push(Attribute {
                pound_token: Default::default(),
                style: AttrStyle::Outer,
                bracket_token: Bracket::default(),
                meta: meta.clone(),
            });
        }
    }

    quote! {
        #[#parent]
        #item_impl
    }
    .into()
}
