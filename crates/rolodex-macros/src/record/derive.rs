//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates the `Record` impl (schema and field accessor) and one field
//! name constant per queryable field.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result};

use super::attrs::{parse_field_attrs, Kind};

struct QueryField {
    ident: Ident,
    query_name: String,
    kind: Kind,
    optional: bool,
    span: Span,
}

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut query_fields: Vec<QueryField> = Vec::new();

    for field in fields.iter() {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attr = parse_field_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }
        let Some(kind) = attr.kind else {
            continue;
        };

        let query_name = attr.rename.unwrap_or_else(|| ident.to_string());
        if let Some(previous) = query_fields.iter().find(|f| f.query_name == query_name) {
            let mut err = Error::new(
                attr.span,
                format!("duplicate query field name '{}'", query_name),
            );
            err.combine(Error::new(previous.span, "first declared here"));
            return Err(err);
        }

        query_fields.push(QueryField {
            ident,
            query_name,
            kind,
            optional: attr.optional,
            span: attr.span,
        });
    }

    let field_constants = query_fields.iter().map(|f| {
        let const_name = format_ident!("{}", to_screaming_snake_case(&f.query_name));
        let query_name = &f.query_name;
        quote! {
            /// Field name constant for type-safe queries.
            pub const #const_name: &'static str = #query_name;
        }
    });

    let schema_entries = query_fields.iter().map(|f| {
        let query_name = &f.query_name;
        let variant = format_ident!("{}", f.kind.variant());
        quote! { (#query_name, ::rolodex_query::FieldKind::#variant) }
    });

    let field_matches = query_fields.iter().map(|f| {
        let query_name = &f.query_name;
        let ident = &f.ident;
        let value_expr = if f.optional {
            let inner = value_of(f.kind, quote! { v }, true);
            quote! {
                match &self.#ident {
                    ::core::option::Option::Some(v) => #inner,
                    ::core::option::Option::None => ::rolodex_query::Value::None,
                }
            }
        } else {
            value_of(f.kind, quote! { self.#ident }, false)
        };
        quote! { #query_name => #value_expr, }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::rolodex_query::Record for #struct_name #ty_generics #where_clause {
            fn schema() -> ::rolodex_query::Schema {
                ::rolodex_query::Schema::from_derive(&[#(#schema_entries),*])
            }

            fn field_value(&self, field: &str) -> ::rolodex_query::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::rolodex_query::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Builds the `Value` expression for one field.
///
/// `by_ref` is true when `place` is already a reference (the `Some(v)` arm
/// of an optional field).
fn value_of(kind: Kind, place: TokenStream, by_ref: bool) -> TokenStream {
    let borrowed = if by_ref {
        quote! { #place }
    } else {
        quote! { &#place }
    };
    let copied = if by_ref {
        quote! { *#place }
    } else {
        quote! { #place }
    };

    match kind {
        Kind::Text => quote! { ::rolodex_query::Value::Text(#borrowed) },
        Kind::Number => quote! {
            ::rolodex_query::Value::Number(::rolodex_query::Number::from(#copied))
        },
        Kind::Timestamp => quote! {
            ::rolodex_query::Value::Timestamp(::rolodex_query::AsTimestamp::as_timestamp(#borrowed))
        },
        Kind::Bool => quote! { ::rolodex_query::Value::Bool(#copied) },
        Kind::Tags => quote! { ::rolodex_query::Value::Tags(#borrowed) },
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
