use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};
mod value_macros;

/// Generates a `From<Inner>` implementation for every single-field tuple
/// variant of an enum.
/// ```ignore
/// #[derive(FromVariants)]
/// enum Value {
///     Null,
///     Boolean(bool),
/// }
/// // expands to `impl From<bool> for Value`
/// ```
#[proc_macro_derive(FromVariants)]
pub fn from_variants_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    value_macros::from_variants_derive_impl(input).into()
}
