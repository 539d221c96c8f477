//! Free-text search across several fields.

use crate::text::{contains_folded, fold};
use crate::value::Value;

/// Case- and accent-insensitive substring search over a list of fields.
///
/// A record passes if the search text is empty, or if the folded text
/// occurs in at least one of the fields. Tags fields pass when any tag
/// contains the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    text: String,
    folded: String,
    fields: Vec<String>,
}

impl Search {
    pub fn new<I, S>(text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let text = text.into();
        Search {
            folded: fold(&text),
            text,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Tests one record, pulling each field through `lookup`.
    pub fn matches<'a, F>(&self, mut lookup: F) -> bool
    where
        F: FnMut(&str) -> Value<'a>,
    {
        if self.is_empty() {
            return true;
        }
        self.fields.iter().any(|field| match lookup(field) {
            Value::Text(s) => contains_folded(s, &self.folded),
            Value::Tags(tags) => tags.iter().any(|t| contains_folded(t, &self.folded)),
            _ => false,
        })
    }
}
