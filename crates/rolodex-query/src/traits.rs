//! Traits for derive macro support.
//!
//! [`Record`] is implemented by `#[derive(Record)]` from `rolodex-macros`,
//! and can be written by hand for types that need custom field logic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::schema::Schema;
use crate::value::{Timestamp, Value};

/// A type the engine can search, filter and sort.
///
/// # Derive Usage
///
/// ```ignore
/// use rolodex::Record;
///
/// #[derive(Record)]
/// struct Connection {
///     #[field(Text)]
///     name: String,
///     #[field(Text)]
///     role: String,
///     #[field(Timestamp)]
///     connected_at: chrono::NaiveDate,
/// }
///
/// let engine = rolodex::RecordQueryEngine::for_record::<Connection>();
/// ```
///
/// # Manual Implementation
///
/// ```
/// use rolodex_query::{Number, Record, Schema, Value};
///
/// struct Community {
///     name: String,
///     members: u32,
/// }
///
/// impl Record for Community {
///     fn schema() -> Schema {
///         Schema::builder()
///             .text("name")
///             .number("members")
///             .build()
///             .expect("field names are unique")
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "members" => Value::Number(Number::from(self.members)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// The fields this type exposes to queries.
    fn schema() -> Schema
    where
        Self: Sized;

    /// Returns the value of a field, or [`Value::None`] if it is absent on
    /// this record or not declared.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function compatible with the `*_with` engine methods.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

/// Conversion of date and time types into [`Timestamp`].
///
/// Used by `#[derive(Record)]` for fields marked `#[field(Timestamp)]`.
/// Integers are read as milliseconds since the Unix epoch.
pub trait AsTimestamp {
    fn as_timestamp(&self) -> Timestamp;
}

impl AsTimestamp for Timestamp {
    fn as_timestamp(&self) -> Timestamp {
        *self
    }
}

impl AsTimestamp for i64 {
    fn as_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl AsTimestamp for u64 {
    fn as_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl AsTimestamp for DateTime<Utc> {
    fn as_timestamp(&self) -> Timestamp {
        Timestamp::from(*self)
    }
}

impl AsTimestamp for NaiveDateTime {
    fn as_timestamp(&self) -> Timestamp {
        Timestamp::from(*self)
    }
}

impl AsTimestamp for NaiveDate {
    fn as_timestamp(&self) -> Timestamp {
        Timestamp::from(*self)
    }
}
