//! Proc macros for Rolodex.
//!
//! # Available Macros
//!
//! - [`Record`] - Generate a `Record` impl (schema plus field accessor) from
//!   struct field annotations

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for queryable structs.
///
/// Only fields carrying a `#[field(...)]` attribute are visible to queries.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `Text` | Text field (search, exact and contains filters, collated and token sorts) |
/// | `Number` | Numeric field, any primitive integer or float |
/// | `Timestamp` | Date or time field, via `AsTimestamp` |
/// | `Bool` | Boolean field |
/// | `Tags` | `Vec<String>` field; exact filters test membership |
/// | `optional` | The field is an `Option<_>`; `None` is absent |
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom name for queries |
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Connection::NAME`, `Connection::CONNECTED_AT`)
/// 2. `Record::schema()` listing every annotated field with its kind
/// 3. `Record::field_value()` borrowing each field as a `Value`
///
/// # Example
///
/// ```ignore
/// use rolodex::{Query, Record, RecordQueryEngine};
///
/// #[derive(Record)]
/// struct Connection {
///     #[field(Text)]
///     name: String,
///
///     #[field(Number, rename = "mutual")]
///     mutual_connections: u32,
///
///     #[field(Text, optional)]
///     company: Option<String>,
///
///     avatar_url: String,
/// }
///
/// let engine = RecordQueryEngine::for_record::<Connection>();
/// let query = Query::new().order_desc(Connection::MUTUAL);
/// ```
///
/// # Compile-Time Errors
///
/// - Deriving on an enum, union or tuple struct
/// - An unknown field kind
/// - Two fields sharing a query name
#[proc_macro_derive(Record, attributes(field))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
