//! Attribute parsing for the Record derive macro.
//!
//! Parses the `#[field(...)]` attributes placed on struct fields.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// The kind of a queryable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Number,
    Timestamp,
    Bool,
    Tags,
}

const EXPECTED_KINDS: &str = "Text, Number, Timestamp, Bool, Tags";

impl Kind {
    fn parse(name: &str, span: Span) -> Result<Self> {
        match name {
            "Text" | "text" | "String" => Ok(Kind::Text),
            "Number" | "number" => Ok(Kind::Number),
            "Timestamp" | "timestamp" | "Date" => Ok(Kind::Timestamp),
            "Bool" | "bool" | "boolean" => Ok(Kind::Bool),
            "Tags" | "tags" => Ok(Kind::Tags),
            other => Err(Error::new(
                span,
                format!(
                    "unknown field kind '{}'. Expected one of: {}",
                    other, EXPECTED_KINDS
                ),
            )),
        }
    }

    /// The `FieldKind` variant name in `rolodex-query`.
    pub fn variant(self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Number => "Number",
            Kind::Timestamp => "Timestamp",
            Kind::Bool => "Bool",
            Kind::Tags => "Tags",
        }
    }
}

/// Field-level attributes from `#[field(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    pub kind: Option<Kind>,
    pub skip: bool,
    /// The Rust field is an `Option<_>`; `None` reads as absent.
    pub optional: bool,
    pub rename: Option<String>,
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            kind: None,
            skip: false,
            optional: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_value(expr: &Expr, what: &str) -> Result<(String, Span)> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok((s.value(), s.span())),
        other => Err(Error::new(
            other.span(),
            format!("{} must be a string literal", what),
        )),
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();
        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("optional") => attr.optional = true,
                Meta::Path(p) => {
                    let ident: &Ident = p.get_ident().ok_or_else(|| {
                        Error::new(p.span(), format!("expected a field kind: {}", EXPECTED_KINDS))
                    })?;
                    attr.kind = Some(Kind::parse(&ident.to_string(), ident.span())?);
                    attr.span = ident.span();
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_value(&nv.value, "rename")?.0);
                }
                Meta::NameValue(nv) if nv.path.is_ident("kind") => {
                    let (value, span) = string_value(&nv.value, "kind")?;
                    attr.kind = Some(Kind::parse(&value, span)?);
                    attr.span = span;
                }
                Meta::NameValue(nv) => {
                    return Err(Error::new(
                        nv.path.span(),
                        "unknown attribute. Expected: rename or kind",
                    ));
                }
                Meta::List(list) => {
                    return Err(Error::new(
                        list.span(),
                        "unexpected nested attribute. Expected a field kind, skip, optional, rename = \"...\" or kind = \"...\"",
                    ));
                }
            }
        }

        if attr.optional && attr.kind.is_none() && !attr.skip {
            return Err(Error::new(
                input.span(),
                "optional needs a field kind, e.g. #[field(Text, optional)]",
            ));
        }

        Ok(attr)
    }
}

/// Extracts the `#[field(...)]` attribute from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
