//! Runtime value types for field comparison.
//!
//! A [`Value`] is what a record hands back when the engine asks for one of
//! its fields. It borrows from the record, so filtering and sorting never
//! copy record data.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::schema::FieldKind;

/// Field value borrowed from a record.
///
/// # Example
///
/// ```
/// use rolodex_query::{Number, Value};
///
/// struct Connection {
///     name: String,
///     mutual: u32,
/// }
///
/// fn accessor<'a>(c: &'a Connection, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(&c.name),
///         "mutual" => Value::Number(Number::from(c.mutual)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value.
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Point in time.
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Ordered sequence of text tags.
    Tags(&'a [String]),
    /// Field absent on this record.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if the field is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The schema kind this value belongs to, or `None` when absent.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Value::Text(_) => Some(FieldKind::Text),
            Value::Number(_) => Some(FieldKind::Number),
            Value::Timestamp(_) => Some(FieldKind::Timestamp),
            Value::Bool(_) => Some(FieldKind::Bool),
            Value::Tags(_) => Some(FieldKind::Tags),
            Value::None => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&'a [String]> {
        match self {
            Value::Tags(tags) => Some(tags),
            _ => None,
        }
    }
}

/// Owned value used on the query side (filter operands).
///
/// Unlike [`Value`], which borrows from a record, `FieldValue` owns its
/// data so it can live inside a [`Query`](crate::Query).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Timestamp(Timestamp),
    Bool(bool),
}

impl FieldValue {
    /// The schema kind of this operand.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }

    /// Returns `true` if the operand may be compared against a field of
    /// `kind`. Tags fields accept a text operand (tag membership).
    pub fn fits(&self, kind: FieldKind) -> bool {
        self.kind() == kind || (kind == FieldKind::Tags && self.kind() == FieldKind::Text)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<Number> for FieldValue {
    fn from(n: Number) -> Self {
        FieldValue::Number(n)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(t: Timestamp) -> Self {
        FieldValue::Timestamp(t)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(Timestamp::from(dt))
    }
}

/// Numeric value that keeps signed, unsigned and float inputs apart.
///
/// Comparisons between different variants go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Compares two numbers, handling mixed variants.
    ///
    /// Returns `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for FieldValue {
                fn from(n: $source) -> Self {
                    FieldValue::Number(Number::from(n))
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Milliseconds since the Unix epoch, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Saturates at the `i64` range.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }

    /// Converts back to a chrono datetime. `None` if out of chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp(dt.and_utc().timestamp_millis())
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::from(date.and_time(NaiveTime::MIN))
    }
}
