//! Query builder.
//!
//! A [`Query`] is a plain value describing one search request: free-text
//! search, field filters, sort keys and an optional offset/limit window.
//! It is built fresh for every interaction and handed to
//! [`RecordQueryEngine`](crate::RecordQueryEngine), which checks it against
//! the record schema before running it.

use crate::filter::{Filter, FilterMode, FilterValue};
use crate::ordering::{compare_by_keys, Comparator, Dir, SortKey};
use crate::search::Search;
use crate::value::{FieldValue, Value};

/// A search request over a record set.
///
/// The match logic is:
///
/// ```text
/// match = (search text empty, or found in at least one search field)
///       ∧ (every filter matches)
/// ```
///
/// # Example
///
/// ```
/// use rolodex_query::Query;
///
/// let query = Query::new()
///     .search("fatima", ["name", "title"])
///     .filter_eq("role", "founder")
///     .filter_contains("location", "uae")
///     .order_desc("connected_at")
///     .limit(20)
///     .build();
///
/// assert_eq!(query.filters().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    search: Option<Search>,
    filters: Vec<Filter>,
    sort_keys: Vec<SortKey>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// Creates a query that matches everything in input order.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Sets the free-text search and the fields it looks in.
    ///
    /// Calling this again replaces the previous search.
    pub fn search<I, S>(mut self, text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = Some(Search::new(text, fields));
        self
    }

    // ========================================================================
    // Filters
    // ========================================================================

    pub fn filter(mut self, field: &str, mode: FilterMode, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter::new(field, mode, value));
        self
    }

    /// Adds an exact-match filter.
    pub fn filter_eq(self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.filter(field, FilterMode::Exact, FilterValue::Is(value.into()))
    }

    /// Adds a case-insensitive substring filter.
    pub fn filter_contains(self, field: &str, needle: &str) -> Self {
        self.filter(
            field,
            FilterMode::Contains,
            FilterValue::Is(FieldValue::Text(needle.to_string())),
        )
    }

    /// Adds an unconstrained filter (the "any" selection).
    ///
    /// It matches every record but the field is still checked against the
    /// schema.
    pub fn filter_any(self, field: &str) -> Self {
        self.filter(field, FilterMode::Exact, FilterValue::Any)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_keys.push(key);
        self
    }

    pub fn order_by(self, field: &str, dir: Dir) -> Self {
        self.sort_by(SortKey::new(field, dir, Comparator::Natural))
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Adds an ascending, case- and accent-insensitive text ordering.
    pub fn order_collated(self, field: &str) -> Self {
        self.sort_by(SortKey::collated(field))
    }

    // ========================================================================
    // Window
    // ========================================================================

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Finalizes the query.
    ///
    /// Schema checks happen in the engine, which owns the schema.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn search_spec(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns `true` if no search text and no constraining filter is set.
    pub fn is_empty(&self) -> bool {
        self.search.as_ref().map_or(true, Search::is_empty)
            && self.filters.iter().all(|f| f.value().is_any())
    }

    // ========================================================================
    // Execution (unchecked)
    // ========================================================================

    /// Tests if a single item matches this query.
    ///
    /// This does not consult a schema; fields the accessor does not know
    /// read as absent.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let search_pass = self
            .search
            .as_ref()
            .map_or(true, |search| search.matches(|field| accessor(item, field)));

        search_pass
            && self
                .filters
                .iter()
                .all(|filter| filter.matches(&accessor(item, filter.field())))
    }

    /// Filters and sorts, without applying offset or limit.
    pub(crate) fn select<'a, T, F>(&self, items: &'a [T], accessor: &F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, accessor))
            .collect();

        if !self.sort_keys.is_empty() {
            // sort_by is stable, so ties keep input order.
            results.sort_by(|a, b| compare_by_keys(*a, *b, &self.sort_keys, accessor));
        }

        results
    }

    /// Applies offset and limit to an already selected list.
    pub(crate) fn window<'a, T>(&self, results: Vec<&'a T>) -> Vec<&'a T> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        results.into_iter().skip(offset).take(limit).collect()
    }
}
