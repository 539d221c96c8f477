//! Error types for the query crate.

use thiserror::Error;

use crate::schema::FieldKind;

/// Where in a query a field was referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Search,
    Filter,
    Sort,
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Usage::Search => "search",
            Usage::Filter => "filter",
            Usage::Sort => "sort",
        })
    }
}

/// Configuration errors detected when a query is checked against a schema.
///
/// Evaluation itself cannot fail; every variant here describes a query or
/// schema that was put together wrongly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query names a field the schema does not declare.
    #[error("{usage} references undeclared field '{field}'")]
    UnknownField { field: String, usage: Usage },

    /// The field exists but cannot be used this way.
    #[error("{usage} on field '{field}' needs {expected} values, field is {actual}")]
    KindMismatch {
        field: String,
        usage: Usage,
        expected: &'static str,
        actual: FieldKind,
    },

    /// A schema declares the same field twice.
    #[error("field '{field}' declared more than once")]
    DuplicateField { field: String },

    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
