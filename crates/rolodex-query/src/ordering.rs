//! Sort keys for query results.
//!
//! A [`SortKey`] names a field, a direction and a [`Comparator`]. Records
//! whose field is absent always sort after records that have it, in either
//! direction.

use std::cmp::Ordering;

use crate::text::{collate, first_token, last_token};
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Dir {
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How two field values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparator {
    /// Numeric, chronological, boolean or raw byte-wise text order.
    #[default]
    Natural,
    /// Case- and accent-insensitive text order.
    Collated,
    /// Collated order of the first whitespace-delimited token.
    FirstToken,
    /// Collated order of the last whitespace-delimited token.
    LastToken,
}

impl Comparator {
    /// Returns `true` if this comparator only applies to text fields.
    pub fn needs_text(self) -> bool {
        !matches!(self, Comparator::Natural)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Natural => "natural",
            Comparator::Collated => "collated",
            Comparator::FirstToken => "first_token",
            Comparator::LastToken => "last_token",
        }
    }
}

/// One sort criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub dir: Dir,
    pub comparator: Comparator,
}

impl SortKey {
    pub fn new(field: impl Into<String>, dir: Dir, comparator: Comparator) -> Self {
        SortKey {
            field: field.into(),
            dir,
            comparator,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Asc, Comparator::Natural)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Desc, Comparator::Natural)
    }

    /// Ascending, case- and accent-insensitive text order.
    pub fn collated(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Asc, Comparator::Collated)
    }

    pub fn with_dir(mut self, dir: Dir) -> Self {
        self.dir = dir;
        self
    }

    /// Compares two field values under this key.
    ///
    /// Absent values go last regardless of direction. So do NaN numbers
    /// and, for the token comparators, text with no token. Mismatched
    /// kinds compare equal so the stable sort leaves them in input order.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        let (a, b) = match self.comparator {
            Comparator::FirstToken => (token_of(a, first_token), token_of(b, first_token)),
            Comparator::LastToken => (token_of(a, last_token), token_of(b, last_token)),
            _ => (sortable(a), sortable(b)),
        };

        match (&a, &b) {
            (Value::None, Value::None) => Ordering::Equal,
            (Value::None, _) => Ordering::Greater,
            (_, Value::None) => Ordering::Less,
            _ => {
                let base = match self.comparator {
                    Comparator::Natural => compare_values(&a, &b),
                    _ => match (&a, &b) {
                        (Value::Text(x), Value::Text(y)) => Some(collate(x, y)),
                        _ => None,
                    },
                };
                base.map(|o| self.dir.apply(o)).unwrap_or(Ordering::Equal)
            }
        }
    }
}

fn sortable<'a>(value: &Value<'a>) -> Value<'a> {
    match value {
        Value::Number(n) if n.is_nan() => Value::None,
        other => other.clone(),
    }
}

fn token_of<'a>(value: &Value<'a>, pick: fn(&'a str) -> Option<&'a str>) -> Value<'a> {
    match value {
        Value::Text(s) => pick(s).map(Value::Text).unwrap_or(Value::None),
        _ => Value::None,
    }
}

/// Compares two present values of the same kind.
///
/// Returns `None` for mismatched kinds, NaN, or absent values.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Tags(a), Value::Tags(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Compares two items using a list of sort keys.
///
/// The first key decides; later keys only break ties.
pub(crate) fn compare_by_keys<T, F>(a: &T, b: &T, keys: &[SortKey], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    for key in keys {
        let ordering = key.compare(&accessor(a, &key.field), &accessor(b, &key.field));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
