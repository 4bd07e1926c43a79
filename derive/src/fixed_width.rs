use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    DeriveInput, Error, Expr, Ident, LitChar, LitInt, Member, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

use crate::from_fields::{binding_names, sequence_pattern, sequence_type, struct_members};

pub(crate) fn expand_fixed_width(input: &DeriveInput) -> Result<TokenStream> {
    let members = struct_members(input, "FixedWidth")?;

    if members.is_empty() {
        Err(Error::new_spanned(
            input,
            "`FixedWidth` may only be derived on structs with at least one field.",
        ))?
    }

    let syn::Data::Struct(data) = &input.data else {
        unreachable!() // Checked by `struct_members`.
    };

    let fields = data
        .fields
        .iter()
        .zip(&members)
        .map(|(field, (member, ty))| FieldMetadata::parse(field, member, ty))
        .collect::<Result<Vec<_>>>()?;

    // Compose from the last field backward, guarding the last.
    let mut composition = quote! { ::flatline::sans::Nil };

    for (i, field) in fields.iter().enumerate().rev() {
        let decoder = field.decoder();

        composition = if i == fields.len() - 1 {
            quote! { ::flatline::sans::Sequence::prepend_last(#composition, #decoder) }
        } else {
            quote! { ::flatline::sans::Sequence::prepend(#composition, #decoder) }
        };
    }

    let types = members.iter().map(|(_, ty)| *ty).collect::<Vec<_>>();
    let sequence = sequence_type(&types);

    let bindings = binding_names(members.len());
    let pattern = sequence_pattern(&bindings);
    let names = members.iter().map(|(member, _)| member);

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::flatline::avec::FixedWidth for #name #type_generics #where_clause {
            fn decoder() -> impl ::flatline::sans::Decoder<Output = Self> {
                ::flatline::sans::Decoder::map(#composition, |fields: #sequence| {
                    let #pattern = fields;
                    Self { #(#names: #bindings),* }
                })
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    ty: Type,
    attribute: FieldAttribute,
}

impl FieldMetadata {
    fn parse(field: &syn::Field, member: &Member, ty: &Type) -> Result<Self> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            Err(Error::new(
                member.span(),
                "Every field of a `FixedWidth` struct must have a `field` attribute.",
            ))?
        };

        let attribute: FieldAttribute = attr.meta.require_list()?.parse_args()?;

        Ok(Self {
            ty: ty.clone(),
            attribute,
        })
    }

    /// The expression building this field's decoder.
    fn decoder(&self) -> TokenStream2 {
        let ty = &self.ty;
        let FieldAttribute {
            start,
            end,
            alignment,
            padding,
            read,
            default,
        } = &self.attribute;

        let alignment = match alignment {
            Alignment::Left => quote! { ::flatline::sans::Alignment::Left },
            Alignment::Right => quote! { ::flatline::sans::Alignment::Right },
        };

        let field = quote! {
            ::flatline::sans::Field::<#ty, _>::new(#start, #end, #alignment, #padding, #read)
        };

        match default {
            Some(default) => quote! { #field.with_default(#default) },
            None => field,
        }
    }
}

#[derive(Debug)]
enum Alignment {
    Left,
    Right,
}

#[derive(Debug)]
struct FieldAttribute {
    start: usize,
    end: usize,
    alignment: Alignment,
    padding: LitChar,
    read: Expr,
    default: Option<Expr>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let start_lit = input.parse::<LitInt>()?;
        input.parse::<Token![..]>()?;
        let end_lit = input.parse::<LitInt>()?;

        let start = start_lit.base10_parse::<usize>()?;
        let end = end_lit.base10_parse::<usize>()?;

        if start > end {
            Err(Error::new(
                start_lit.span().join(end_lit.span()).unwrap_or(start_lit.span()),
                "Field start must not be after its end.",
            ))?
        }

        let mut alignment = None;
        let mut padding = None;
        let mut read = None;
        let mut default = None;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;

            if input.is_empty() {
                break; // Trailing comma.
            }

            let key = input.parse::<Ident>()?;
            input.parse::<Token![=]>()?;

            let duplicate = if key == "align" {
                let value = input.parse::<Ident>()?;
                let parsed = if value == "left" {
                    Alignment::Left
                } else if value == "right" {
                    Alignment::Right
                } else {
                    Err(Error::new_spanned(
                        value,
                        "Alignment must be `left` or `right`.",
                    ))?
                };
                alignment.replace(parsed).is_some()
            } else if key == "pad" {
                padding.replace(input.parse::<LitChar>()?).is_some()
            } else if key == "read" {
                read.replace(input.parse::<Expr>()?).is_some()
            } else if key == "default" {
                default.replace(input.parse::<Expr>()?).is_some()
            } else {
                Err(Error::new_spanned(
                    &key,
                    "Expected one of `align`, `pad`, `read` or `default`.",
                ))?
            };

            if duplicate {
                Err(Error::new_spanned(key, "Duplicate field argument."))?
            }
        }

        let Some(read) = read else {
            Err(Error::new(
                input.span(),
                "Field attribute must supply a reader with `read = ...`.",
            ))?
        };

        Ok(Self {
            start,
            end,
            alignment: alignment.unwrap_or(Alignment::Left),
            padding: padding.unwrap_or_else(|| LitChar::new(' ', Span::call_site())),
            read,
            default,
        })
    }
}
