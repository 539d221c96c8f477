//! # Rolodex - Screens over Static Records
//!
//! Rolodex powers the list screens of a professional-networking app:
//! connections, connection requests, discover, communities, events and the
//! feed. Each screen is a search box, a few filter menus and a sort menu over
//! a fixed record set, and every one of them is served by the same
//! [`RecordQueryEngine`] configured by data.
//!
//! - [`Record`] (trait and derive): declare which struct fields are queryable
//! - [`Query`] and [`RecordQueryEngine`]: search, filter, sort, paginate
//! - [`screen`]: YAML screen presets and the screen-state → query glue
//! - [`source`]: where a screen's records come from
//! - [`format`]: relative dates and compact counts for display
//! - [`sample`]: the sample datasets
//!
//! ## Quick Start
//!
//! ```rust
//! use rolodex::sample;
//! use rolodex::screen::{Screen, ScreenCatalog, ScreenState};
//! use rolodex::source::StaticSource;
//!
//! let catalog = ScreenCatalog::builtin().unwrap();
//! let screen = Screen::from_catalog(
//!     &catalog,
//!     "connections",
//!     StaticSource::new(sample::connections()),
//! )
//! .unwrap();
//!
//! let state = ScreenState::new()
//!     .select("role", "founder")
//!     .select("location", "uae");
//! let page = screen.view(&state).unwrap();
//!
//! let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Sarah Al-Rashid", "Layla Kassem"]);
//! ```
//!
//! ## Deriving Records
//!
//! The derive expands to paths under `rolodex_query`, so crates deriving
//! [`Record`] depend on `rolodex-query` alongside `rolodex`.
//!
//! ```rust
//! use rolodex::{Query, Record, RecordQueryEngine};
//!
//! #[derive(Record)]
//! struct Member {
//!     #[field(Text)]
//!     name: String,
//!     #[field(Number)]
//!     posts: u32,
//! }
//!
//! let members = vec![
//!     Member { name: "Hana".into(), posts: 4 },
//!     Member { name: "Karim".into(), posts: 9 },
//! ];
//! let engine = RecordQueryEngine::for_record::<Member>();
//! let query = Query::new().order_desc(Member::POSTS).limit(1);
//! let top = engine.evaluate(&members, &query).unwrap();
//! assert_eq!(top[0].name, "Karim");
//! ```

mod error;
pub mod format;
pub mod sample;
pub mod screen;
pub mod source;

pub use error::{Result, ScreenError};

// Query engine (re-exported from rolodex-query)
pub use rolodex_query::{
    collate, compare_values, fold, AsTimestamp, Comparator, Dir, FieldDef, FieldKind,
    FieldValue, Filter, FilterMode, FilterValue, Number, Page, PageRequest, Query, QueryError,
    Record, RecordQueryEngine, Schema, SchemaBuilder, Search, SortKey, Timestamp, Usage, Value,
};

// Record derive macro
pub use rolodex_macros::Record;

pub use format::{compact_count, relative_time, RelativeTime};
pub use screen::{Screen, ScreenCatalog, ScreenConfig, ScreenState};
pub use source::{RecordSource, StaticSource};
