//! Field schemas for record sets.
//!
//! A [`Schema`] lists the fields a record type exposes to the engine and the
//! kind of value each one yields. The engine checks every query against it
//! before touching any record.

use crate::error::{QueryError, Result};

/// The kind of value a field yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Timestamp,
    Bool,
    Tags,
}

impl FieldKind {
    /// Returns `true` for kinds that free-text search and containment
    /// filters can look inside.
    pub fn is_textual(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Tags)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Bool => "bool",
            FieldKind::Tags => "tags",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

/// Declared fields of a record type, in declaration order.
///
/// # Example
///
/// ```
/// use rolodex_query::{FieldKind, Schema};
///
/// let schema = Schema::builder()
///     .text("name")
///     .timestamp("connected_at")
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.kind_of("name"), Some(FieldKind::Text));
/// assert!(schema.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Builds a schema, rejecting duplicate field names.
    pub fn new(fields: Vec<FieldDef>) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(QueryError::DuplicateField {
                    field: field.name.clone(),
                });
            }
        }
        Ok(Schema { fields })
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Used by `#[derive(Record)]`, which rejects duplicates at compile time.
    #[doc(hidden)]
    pub fn from_derive(fields: &[(&'static str, FieldKind)]) -> Self {
        Schema {
            fields: fields
                .iter()
                .map(|(name, kind)| FieldDef {
                    name: (*name).to_string(),
                    kind: *kind,
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.get(name).map(|f| f.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fluent builder for [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn text(self, name: impl Into<String>) -> Self {
        self.field(name, FieldKind::Text)
    }

    pub fn number(self, name: impl Into<String>) -> Self {
        self.field(name, FieldKind::Number)
    }

    pub fn timestamp(self, name: impl Into<String>) -> Self {
        self.field(name, FieldKind::Timestamp)
    }

    pub fn bool(self, name: impl Into<String>) -> Self {
        self.field(name, FieldKind::Bool)
    }

    pub fn tags(self, name: impl Into<String>) -> Self {
        self.field(name, FieldKind::Tags)
    }

    pub fn build(self) -> Result<Schema> {
        Schema::new(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let schema = Schema::builder()
            .text("name")
            .number("members")
            .tags("topics")
            .build()
            .unwrap();

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "members", "topics"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn duplicate_field_rejected() {
        let err = Schema::builder()
            .text("name")
            .number("name")
            .build()
            .unwrap_err();
        assert!(matches!(err, QueryError::DuplicateField { field } if field == "name"));
    }

    #[test]
    fn textual_kinds() {
        assert!(FieldKind::Text.is_textual());
        assert!(FieldKind::Tags.is_textual());
        assert!(!FieldKind::Number.is_textual());
        assert_eq!(FieldKind::Timestamp.to_string(), "timestamp");
    }
}
