//! Rolodex Query - filter, sort and paginate in-memory record collections.
//!
//! Every list screen of a networking app does the same thing with its
//! records: narrow them by a search box and a few filter menus, order them
//! by the selected sort, and show one page. This crate does that once, for
//! any record type:
//!
//! - Free-text search, case- and accent-insensitive, across several fields
//! - Field filters in two modes: exact match and substring containment,
//!   each with an "any" sentinel
//! - Sort keys over numbers, timestamps, booleans and text, with collated
//!   and token-based text ordering
//! - Offset/limit windows and numbered pages
//! - Schema checks that reject queries naming unknown fields before any
//!   record is looked at
//!
//! # Quick Start
//!
//! ```rust
//! use rolodex_query::{Query, Record, RecordQueryEngine, Schema, Value};
//!
//! struct Connection {
//!     name: String,
//!     role: String,
//!     location: String,
//! }
//!
//! impl Record for Connection {
//!     fn schema() -> Schema {
//!         Schema::builder()
//!             .text("name")
//!             .text("role")
//!             .text("location")
//!             .build()
//!             .expect("unique fields")
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::Text(&self.name),
//!             "role" => Value::Text(&self.role),
//!             "location" => Value::Text(&self.location),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let connection = |name: &str, role: &str, location: &str| Connection {
//!     name: name.into(),
//!     role: role.into(),
//!     location: location.into(),
//! };
//! let connections = vec![
//!     connection("Sarah Al-Rashid", "founder", "Dubai, UAE"),
//!     connection("Omar Haddad", "engineer", "Amman, Jordan"),
//!     connection("Layla Kassem", "founder", "Abu Dhabi, UAE"),
//! ];
//!
//! let engine = RecordQueryEngine::for_record::<Connection>();
//! let query = Query::new()
//!     .filter_eq("role", "founder")
//!     .filter_contains("location", "uae")
//!     .order_collated("name")
//!     .build();
//!
//! let results = engine.evaluate(&connections, &query).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Layla Kassem");
//! ```
//!
//! # Evaluation Order
//!
//! ```text
//! 1. search:  text empty, or found in at least one search field
//! 2. filters: every non-"any" filter matches
//! 3. sort:    stable, by each sort key in turn
//! 4. window:  offset, then limit (or a requested page)
//! ```
//!
//! Records whose field is absent never match a search or a constraining
//! filter on that field, and sort after every record that has it.
//!
//! # Field Kinds
//!
//! | Kind | Search | Exact filter | Contains filter | Sort comparators |
//! |------|--------|--------------|-----------------|------------------|
//! | Text | yes | equality | yes | all |
//! | Tags | yes | tag membership | any tag | natural |
//! | Number | no | equality | no | natural |
//! | Timestamp | no | equality | no | natural |
//! | Bool | no | equality | no | natural |

mod engine;
mod error;
mod filter;
mod ordering;
mod page;
mod query;
mod schema;
mod search;
mod text;
mod traits;
mod value;

pub use engine::RecordQueryEngine;
pub use error::{QueryError, Result, Usage};
pub use filter::{Filter, FilterMode, FilterValue};
pub use ordering::{compare_values, Comparator, Dir, SortKey};
pub use page::{Page, PageRequest};
pub use query::Query;
pub use schema::{FieldDef, FieldKind, Schema, SchemaBuilder};
pub use search::Search;
pub use text::{collate, fold};
pub use traits::{AsTimestamp, Record};
pub use value::{FieldValue, Number, Timestamp, Value};
