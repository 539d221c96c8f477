//! Declarative screen configuration.
//!
//! A screen is a list view over one record set: a search box, a few filter
//! menus and a sort menu. Which fields each control touches is data, not
//! code. It is read from YAML:
//!
//! ```yaml
//! screens:
//!   connections:
//!     search: [name, title, company]
//!     filters:
//!       - { field: role, mode: exact }
//!       - { field: location, mode: contains }
//!     sort:
//!       - { id: recent, field: connected_at, dir: desc }
//!       - { id: name, field: name, comparator: collated }
//!     default_sort: recent
//!     page_size: 20
//! ```
//!
//! The presets for the sample screens are embedded at compile time and
//! returned by [`ScreenCatalog::builtin`]. Applications can replace or
//! extend them with [`ScreenCatalog::from_yaml`], [`ScreenCatalog::from_file`]
//! and [`ScreenCatalog::merge`].
//!
//! [`ScreenState`] is what the user has typed and picked. [`ScreenConfig::query`]
//! turns it into a [`Query`], and [`Screen::view`] evaluates that query
//! against a [`RecordSource`] one page at a time.
//!
//! ## Filter Selections
//!
//! A selection of `""`, `"all"` or `"any"` (any case) leaves the filter
//! unconstrained. Other selections are read according to the filter's
//! `kind` (`text` by default, or `number`/`bool`).
//!
//! A screen with no `search` fields has no search box. Passing search
//! text to it is an error rather than a silent no-op.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rolodex_query::{
    Comparator, Dir, FieldValue, FilterMode, FilterValue, Number, Page, PageRequest, Query,
    RecordQueryEngine, SortKey,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ScreenError};
use crate::source::RecordSource;

const BUILTIN_SCREENS: &str = include_str!("screens.yaml");

const DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// Catalog
// ============================================================================

/// Every configured screen, by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenCatalog {
    screens: BTreeMap<String, ScreenConfig>,
}

impl ScreenCatalog {
    /// The presets shipped with the crate: `connections`, `requests`,
    /// `discover`, `communities`, `events` and `feed`.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SCREENS, None)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, None)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| ScreenError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&yaml, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self> {
        let mut catalog: ScreenCatalog =
            serde_yaml::from_str(yaml).map_err(|e| ScreenError::Parse {
                path: path.map(Path::to_path_buf),
                message: e.to_string(),
            })?;
        for (name, config) in catalog.screens.iter_mut() {
            config.name = name.clone();
        }
        debug!(
            screens = catalog.screens.len(),
            path = ?path,
            "loaded screen catalog"
        );
        Ok(catalog)
    }

    /// Adds the screens of `overrides`, replacing same-named screens.
    pub fn merge(mut self, overrides: ScreenCatalog) -> Self {
        self.screens.extend(overrides.screens);
        self
    }

    pub fn get(&self, name: &str) -> Result<&ScreenConfig> {
        self.screens
            .get(name)
            .ok_or_else(|| ScreenError::UnknownScreen(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.screens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

// ============================================================================
// Screen configuration
// ============================================================================

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// The controls of one screen and the fields behind them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenConfig {
    #[serde(skip)]
    name: String,
    #[serde(default)]
    search: Vec<String>,
    #[serde(default)]
    filters: Vec<FilterSpec>,
    #[serde(default)]
    sort: Vec<SortSpec>,
    #[serde(default)]
    default_sort: Option<String>,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

/// One filter menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    pub field: String,
    #[serde(default)]
    pub mode: ModeSpec,
    #[serde(default)]
    pub kind: SelectionKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSpec {
    #[default]
    Exact,
    Contains,
}

impl From<ModeSpec> for FilterMode {
    fn from(mode: ModeSpec) -> Self {
        match mode {
            ModeSpec::Exact => FilterMode::Exact,
            ModeSpec::Contains => FilterMode::Contains,
        }
    }
}

/// How a filter reads the selected string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    #[default]
    Text,
    Number,
    Bool,
}

impl SelectionKind {
    fn as_str(self) -> &'static str {
        match self {
            SelectionKind::Text => "text",
            SelectionKind::Number => "number",
            SelectionKind::Bool => "bool",
        }
    }

    fn read(self, field: &str, selection: &str) -> Result<FieldValue> {
        let invalid = || ScreenError::InvalidSelection {
            field: field.to_string(),
            value: selection.to_string(),
            kind: self.as_str(),
        };
        let trimmed = selection.trim();

        match self {
            SelectionKind::Text => Ok(FieldValue::Text(selection.to_string())),
            SelectionKind::Number => {
                if let Ok(n) = trimmed.parse::<i64>() {
                    Ok(FieldValue::Number(Number::I64(n)))
                } else {
                    trimmed
                        .parse::<f64>()
                        .map(|n| FieldValue::Number(Number::F64(n)))
                        .map_err(|_| invalid())
                }
            }
            SelectionKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" => Ok(FieldValue::Bool(true)),
                "false" | "no" => Ok(FieldValue::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }

    /// A stand-in operand of this kind, used to check filters up front.
    fn placeholder(self) -> FieldValue {
        match self {
            SelectionKind::Text => FieldValue::Text(String::new()),
            SelectionKind::Number => FieldValue::Number(Number::I64(0)),
            SelectionKind::Bool => FieldValue::Bool(false),
        }
    }
}

/// One entry of the sort menu: a primary key and optional tie-breakers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSpec {
    pub id: String,
    pub field: String,
    #[serde(default)]
    pub dir: DirSpec,
    #[serde(default)]
    pub comparator: ComparatorSpec,
    #[serde(default)]
    pub then: Vec<KeySpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySpec {
    pub field: String,
    #[serde(default)]
    pub dir: DirSpec,
    #[serde(default)]
    pub comparator: ComparatorSpec,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirSpec {
    #[default]
    Asc,
    Desc,
}

impl From<DirSpec> for Dir {
    fn from(dir: DirSpec) -> Self {
        match dir {
            DirSpec::Asc => Dir::Asc,
            DirSpec::Desc => Dir::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorSpec {
    #[default]
    Natural,
    Collated,
    FirstToken,
    LastToken,
}

impl From<ComparatorSpec> for Comparator {
    fn from(comparator: ComparatorSpec) -> Self {
        match comparator {
            ComparatorSpec::Natural => Comparator::Natural,
            ComparatorSpec::Collated => Comparator::Collated,
            ComparatorSpec::FirstToken => Comparator::FirstToken,
            ComparatorSpec::LastToken => Comparator::LastToken,
        }
    }
}

impl SortSpec {
    /// The primary key followed by the tie-breakers.
    pub fn keys(&self) -> Vec<SortKey> {
        let primary = SortKey::new(&self.field, self.dir.into(), self.comparator.into());
        std::iter::once(primary)
            .chain(
                self.then
                    .iter()
                    .map(|k| SortKey::new(&k.field, k.dir.into(), k.comparator.into())),
            )
            .collect()
    }
}

fn is_any_selection(selection: &str) -> bool {
    let s = selection.trim();
    s.is_empty() || s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("any")
}

impl ScreenConfig {
    /// The screen's name in its catalog. Empty for a config not loaded
    /// through a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search
    }

    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    pub fn sort_options(&self) -> &[SortSpec] {
        &self.sort
    }

    /// The sort used when the state selects none: `default_sort`, or the
    /// first option.
    pub fn default_sort(&self) -> Option<&str> {
        self.default_sort
            .as_deref()
            .or_else(|| self.sort.first().map(|s| s.id.as_str()))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn sort_option(&self, id: Option<&str>) -> Result<Option<&SortSpec>> {
        let Some(id) = id.or_else(|| self.default_sort()) else {
            return Ok(None);
        };
        self.sort
            .iter()
            .find(|s| s.id == id)
            .map(Some)
            .ok_or_else(|| ScreenError::UnknownSort {
                screen: self.name.clone(),
                id: id.to_string(),
            })
    }

    /// Builds the query for the current screen state.
    ///
    /// Field names are not checked here; the engine does that when the
    /// query is evaluated. Search text on a screen without search fields
    /// is rejected with [`ScreenError::SearchUnavailable`].
    pub fn query(&self, state: &ScreenState) -> Result<Query> {
        if let Some(field) = state
            .selections
            .keys()
            .find(|field| !self.filters.iter().any(|f| &f.field == *field))
        {
            return Err(ScreenError::UnknownFilter {
                screen: self.name.clone(),
                field: field.clone(),
            });
        }

        if self.search.is_empty() && !state.search.is_empty() {
            return Err(ScreenError::SearchUnavailable {
                screen: self.name.clone(),
            });
        }

        let mut query = Query::new();
        if !self.search.is_empty() {
            query = query.search(state.search.as_str(), self.search.iter().map(String::as_str));
        }

        for spec in &self.filters {
            let value = match state.selections.get(&spec.field) {
                Some(selection) if !is_any_selection(selection) => {
                    FilterValue::Is(spec.kind.read(&spec.field, selection)?)
                }
                _ => FilterValue::Any,
            };
            query = query.filter(&spec.field, spec.mode.into(), value);
        }

        if let Some(sort) = self.sort_option(state.sort.as_deref())? {
            for key in sort.keys() {
                query = query.sort_by(key);
            }
        }

        Ok(query.build())
    }

    /// A query touching every configured field, with each filter holding a
    /// placeholder of its kind.
    fn validation_query(&self) -> Query {
        let mut query = Query::new().search("", self.search.iter().map(String::as_str));
        for spec in &self.filters {
            query = query.filter(
                &spec.field,
                spec.mode.into(),
                FilterValue::Is(spec.kind.placeholder()),
            );
        }
        for key in self.sort.iter().flat_map(SortSpec::keys) {
            query = query.sort_by(key);
        }
        query
    }
}

// ============================================================================
// Screen state
// ============================================================================

/// What the user has typed and picked on a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub search: String,
    /// Filter field → selected value.
    pub selections: BTreeMap<String, String>,
    /// Selected sort option id; `None` uses the screen's default.
    pub sort: Option<String>,
    /// 1-based; `0` reads as the first page.
    pub page: usize,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn select(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections.insert(field.into(), value.into());
        self
    }

    pub fn sort(mut self, id: impl Into<String>) -> Self {
        self.sort = Some(id.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

// ============================================================================
// Screen
// ============================================================================

/// A configured screen bound to its records.
pub struct Screen<S: RecordSource> {
    config: ScreenConfig,
    engine: RecordQueryEngine,
    source: S,
}

impl<S: RecordSource> Screen<S> {
    /// Binds `config` to `source`.
    ///
    /// Every field the configuration names is checked against the record
    /// schema here, so a bad configuration fails before any user input.
    pub fn new(config: ScreenConfig, source: S) -> Result<Self> {
        let engine = RecordQueryEngine::for_record::<S::Item>();

        PageRequest::first(config.page_size)?;
        engine.validate(&config.query(&ScreenState::default())?)?;
        engine.validate(&config.validation_query())?;

        debug!(
            screen = %config.name,
            records = source.records().len(),
            "screen ready"
        );
        Ok(Screen {
            config,
            engine,
            source,
        })
    }

    /// Looks up `name` in `catalog` and binds it to `source`.
    pub fn from_catalog(catalog: &ScreenCatalog, name: &str, source: S) -> Result<Self> {
        Self::new(catalog.get(name)?.clone(), source)
    }

    /// The requested page of matching records.
    pub fn view(&self, state: &ScreenState) -> Result<Page<'_, S::Item>> {
        let query = self.config.query(state)?;
        let page = PageRequest::new(state.page, self.config.page_size)?;
        Ok(self
            .engine
            .evaluate_page(self.source.records(), &query, page)?)
    }

    /// Matches across all pages.
    pub fn count(&self, state: &ScreenState) -> Result<usize> {
        let query = self.config.query(state)?;
        Ok(self.engine.count(self.source.records(), &query)?)
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn engine(&self) -> &RecordQueryEngine {
        &self.engine
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
