use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod fixed_width;
mod from_fields;

#[proc_macro_derive(FromFields)]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_fields::expand_from_fields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(FixedWidth, attributes(field))]
pub fn derive_fixed_width(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match fixed_width::expand_fixed_width(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
