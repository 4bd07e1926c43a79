use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Ident, Member, Result, Type};

pub(crate) fn expand_from_fields(input: &DeriveInput) -> Result<TokenStream> {
    let members = struct_members(input, "FromFields")?;

    let types = members.iter().map(|(_, ty)| *ty).collect::<Vec<_>>();
    let sequence = sequence_type(&types);

    let bindings = binding_names(members.len());
    let pattern = sequence_pattern(&bindings);
    let names = members.iter().map(|(member, _)| member);

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::flatline::sans::FromFields for #name #type_generics #where_clause {
            type Fields = #sequence;

            fn from_fields(fields: Self::Fields) -> Self {
                let #pattern = fields;
                Self { #(#names: #bindings),* }
            }
        }
    };

    Ok(expanded.into())
}

/// The members of a struct and their types, in declaration order.
pub(crate) fn struct_members<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<Vec<(Member, &'a Type)>> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            format!("`{derive}` may only be derived on structs."),
        ))?
    };

    let members = match &data.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|f| Some((Member::Named(f.ident.clone()?), &f.ty)))
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| (Member::from(i), &f.ty))
            .collect(),
        Fields::Unit => vec![],
    };

    Ok(members)
}

pub(crate) fn binding_names(n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("field_{}", i)).collect()
}

/// The `Cons` list type holding `types`, in order.
pub(crate) fn sequence_type(types: &[&Type]) -> TokenStream2 {
    types.iter().rev().fold(quote! { ::flatline::sans::Nil }, |tail, head| {
        quote! { ::flatline::sans::Cons<#head, #tail> }
    })
}

/// The pattern destructuring a `Cons` list into `bindings`, in order.
pub(crate) fn sequence_pattern(bindings: &[Ident]) -> TokenStream2 {
    bindings
        .iter()
        .rev()
        .fold(quote! { ::flatline::sans::Nil }, |tail, head| {
            quote! { ::flatline::sans::Cons(#head, #tail) }
        })
}
