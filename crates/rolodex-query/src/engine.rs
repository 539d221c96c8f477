//! The record query engine.
//!
//! [`RecordQueryEngine`] owns a [`Schema`] and evaluates [`Query`] values
//! against slices of records. Every query is checked against the schema
//! first; evaluation after that is total and never fails.

use tracing::{debug, warn};

use crate::error::{QueryError, Result, Usage};
use crate::filter::{FilterMode, FilterValue};
use crate::page::{Page, PageRequest};
use crate::query::Query;
use crate::schema::{FieldKind, Schema};
use crate::traits::Record;
use crate::value::Value;

/// Stateless evaluator of queries over record slices.
///
/// The engine holds only the schema, so one instance can be shared across
/// threads and reused for every interaction on a screen.
///
/// # Example
///
/// ```
/// use rolodex_query::{Query, RecordQueryEngine, Schema, Value};
///
/// struct Person {
///     name: &'static str,
///     role: &'static str,
/// }
///
/// fn accessor<'a>(p: &'a Person, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(p.name),
///         "role" => Value::Text(p.role),
///         _ => Value::None,
///     }
/// }
///
/// let engine = RecordQueryEngine::new(
///     Schema::builder().text("name").text("role").build().unwrap(),
/// );
/// let people = [
///     Person { name: "Sarah", role: "founder" },
///     Person { name: "Omar", role: "engineer" },
/// ];
///
/// let query = Query::new().filter_eq("role", "founder");
/// let found = engine.evaluate_with(&people, &query, accessor).unwrap();
/// assert_eq!(found[0].name, "Sarah");
///
/// let bad = Query::new().order_asc("salary");
/// assert!(engine.evaluate_with(&people, &bad, accessor).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RecordQueryEngine {
    schema: Schema,
}

impl RecordQueryEngine {
    pub fn new(schema: Schema) -> Self {
        RecordQueryEngine { schema }
    }

    /// Creates an engine for a [`Record`] type using its declared schema.
    pub fn for_record<T: Record>() -> Self {
        RecordQueryEngine::new(T::schema())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Checks every field the query references against the schema.
    pub fn validate(&self, query: &Query) -> Result<()> {
        let result = self.check(query);
        if let Err(err) = &result {
            warn!(error = %err, "query rejected");
        }
        result
    }

    fn check(&self, query: &Query) -> Result<()> {
        if let Some(search) = query.search_spec() {
            for field in search.fields() {
                let kind = self.kind_of(field, Usage::Search)?;
                if !kind.is_textual() {
                    return Err(mismatch(field, Usage::Search, "text or tags", kind));
                }
            }
        }

        for filter in query.filters() {
            let kind = self.kind_of(filter.field(), Usage::Filter)?;
            let operand = match filter.value() {
                FilterValue::Any => continue,
                FilterValue::Is(operand) => operand,
            };
            match filter.mode() {
                FilterMode::Contains if !kind.is_textual() => {
                    return Err(mismatch(filter.field(), Usage::Filter, "text or tags", kind));
                }
                FilterMode::Contains if operand.kind() != FieldKind::Text => {
                    return Err(mismatch(filter.field(), Usage::Filter, "text", kind));
                }
                FilterMode::Exact if !operand.fits(kind) => {
                    return Err(mismatch(
                        filter.field(),
                        Usage::Filter,
                        operand.kind().as_str(),
                        kind,
                    ));
                }
                _ => {}
            }
        }

        for key in query.sort_keys() {
            let kind = self.kind_of(&key.field, Usage::Sort)?;
            if key.comparator.needs_text() && kind != FieldKind::Text {
                return Err(mismatch(&key.field, Usage::Sort, "text", kind));
            }
        }

        Ok(())
    }

    fn kind_of(&self, field: &str, usage: Usage) -> Result<FieldKind> {
        self.schema
            .kind_of(field)
            .ok_or_else(|| QueryError::UnknownField {
                field: field.to_string(),
                usage,
            })
    }

    // ========================================================================
    // Record-based evaluation
    // ========================================================================

    /// Filters, sorts and windows `records`.
    ///
    /// Returns references into `records`; the input is never modified.
    pub fn evaluate<'a, T: Record>(&self, records: &'a [T], query: &Query) -> Result<Vec<&'a T>> {
        self.evaluate_with(records, query, T::accessor)
    }

    /// Like [`evaluate`](Self::evaluate), but pages the sorted matches.
    ///
    /// The page request replaces the query's own offset and limit.
    pub fn evaluate_page<'a, T: Record>(
        &self,
        records: &'a [T],
        query: &Query,
        page: PageRequest,
    ) -> Result<Page<'a, T>> {
        self.evaluate_page_with(records, query, page, T::accessor)
    }

    pub fn count<T: Record>(&self, records: &[T], query: &Query) -> Result<usize> {
        self.count_with(records, query, T::accessor)
    }

    pub fn any<T: Record>(&self, records: &[T], query: &Query) -> Result<bool> {
        self.any_with(records, query, T::accessor)
    }

    /// First match in input order, ignoring sort keys and window.
    pub fn find<'a, T: Record>(&self, records: &'a [T], query: &Query) -> Result<Option<&'a T>> {
        self.find_with(records, query, T::accessor)
    }

    /// Whether a single record passes the query's search and filters.
    pub fn matches<T: Record>(&self, record: &T, query: &Query) -> Result<bool> {
        self.validate(query)?;
        Ok(query.matches(record, T::accessor))
    }

    // ========================================================================
    // Accessor-based evaluation
    // ========================================================================

    pub fn evaluate_with<'a, T, F>(
        &self,
        records: &'a [T],
        query: &Query,
        accessor: F,
    ) -> Result<Vec<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.validate(query)?;
        let matched = query.select(records, &accessor);
        let total = matched.len();
        let results = query.window(matched);
        debug!(
            input = records.len(),
            matched = total,
            returned = results.len(),
            "query evaluated"
        );
        Ok(results)
    }

    pub fn evaluate_page_with<'a, T, F>(
        &self,
        records: &'a [T],
        query: &Query,
        page: PageRequest,
        accessor: F,
    ) -> Result<Page<'a, T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.validate(query)?;
        let page = Page::slice(query.select(records, &accessor), page);
        debug!(
            input = records.len(),
            matched = page.total,
            page = page.number,
            returned = page.len(),
            "query page evaluated"
        );
        Ok(page)
    }

    pub fn count_with<T, F>(&self, records: &[T], query: &Query, accessor: F) -> Result<usize>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.validate(query)?;
        Ok(records
            .iter()
            .filter(|item| query.matches(*item, &accessor))
            .count())
    }

    pub fn any_with<T, F>(&self, records: &[T], query: &Query, accessor: F) -> Result<bool>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.validate(query)?;
        Ok(records.iter().any(|item| query.matches(item, &accessor)))
    }

    pub fn find_with<'a, T, F>(
        &self,
        records: &'a [T],
        query: &Query,
        accessor: F,
    ) -> Result<Option<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.validate(query)?;
        Ok(records.iter().find(|item| query.matches(*item, &accessor)))
    }
}

fn mismatch(field: &str, usage: Usage, expected: &'static str, actual: FieldKind) -> QueryError {
    QueryError::KindMismatch {
        field: field.to_string(),
        usage,
        expected,
        actual,
    }
}
