//! Field filters.
//!
//! A [`Filter`] constrains one field. Two modes exist because screens treat
//! categorical fields and free-form fields differently:
//!
//! - [`FilterMode::Exact`]: the field must equal the operand exactly
//!   (case-sensitive for text, membership for tags).
//! - [`FilterMode::Contains`]: the folded operand must occur inside the
//!   folded field text.
//!
//! Either mode accepts [`FilterValue::Any`], which leaves the field
//! unconstrained.

use std::cmp::Ordering;

use crate::text::{contains_folded, fold};
use crate::value::{FieldValue, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    Exact,
    Contains,
}

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Exact => "exact",
            FilterMode::Contains => "contains",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operand of a filter, or the "any" sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    #[default]
    Any,
    Is(FieldValue),
}

impl FilterValue {
    pub fn is_any(&self) -> bool {
        matches!(self, FilterValue::Any)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FilterValue::Is(v.into()),
            None => FilterValue::Any,
        }
    }
}

/// A single field constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    mode: FilterMode,
    value: FilterValue,
    folded: Option<String>,
}

impl Filter {
    pub fn new(field: impl Into<String>, mode: FilterMode, value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        let folded = match (&mode, &value) {
            (FilterMode::Contains, FilterValue::Is(FieldValue::Text(needle))) => Some(fold(needle)),
            _ => None,
        };
        Filter {
            field: field.into(),
            mode,
            value,
            folded,
        }
    }

    pub fn exact(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Filter::new(field, FilterMode::Exact, FilterValue::Is(value.into()))
    }

    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::new(
            field,
            FilterMode::Contains,
            FilterValue::Is(FieldValue::Text(needle.into())),
        )
    }

    pub fn any(field: impl Into<String>, mode: FilterMode) -> Self {
        Filter::new(field, mode, FilterValue::Any)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Evaluates this filter against a field value.
    ///
    /// `Any` matches every record, even one where the field is absent.
    /// Otherwise an absent field or a value of the wrong kind never matches.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        let operand = match &self.value {
            FilterValue::Any => return true,
            FilterValue::Is(operand) => operand,
        };

        match self.mode {
            FilterMode::Exact => match_exact(operand, field_value),
            FilterMode::Contains => match (&self.folded, field_value) {
                (Some(needle), Value::Text(s)) => contains_folded(s, needle),
                (Some(needle), Value::Tags(tags)) => {
                    tags.iter().any(|t| contains_folded(t, needle))
                }
                _ => false,
            },
        }
    }
}

fn match_exact(operand: &FieldValue, field_value: &Value<'_>) -> bool {
    match (operand, field_value) {
        (FieldValue::Text(want), Value::Text(s)) => want == s,
        (FieldValue::Text(want), Value::Tags(tags)) => tags.iter().any(|t| t == want),
        (FieldValue::Number(want), Value::Number(n)) => n.compare(*want) == Some(Ordering::Equal),
        (FieldValue::Timestamp(want), Value::Timestamp(t)) => want == t,
        (FieldValue::Bool(want), Value::Bool(b)) => want == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    #[test]
    fn exact_text_is_case_sensitive() {
        let filter = Filter::exact("role", "founder");
        assert!(filter.matches(&Value::Text("founder")));
        assert!(!filter.matches(&Value::Text("Founder")));
        assert!(!filter.matches(&Value::Text("co-founder")));
    }

    #[test]
    fn exact_tags_is_membership() {
        let tags = vec!["fintech".to_string(), "ai".to_string()];
        assert!(Filter::exact("topics", "ai").matches(&Value::Tags(&tags)));
        assert!(!Filter::exact("topics", "AI").matches(&Value::Tags(&tags)));
    }

    #[test]
    fn exact_numbers_across_variants() {
        let filter = Filter::exact("members", 1200u32);
        assert!(filter.matches(&Value::Number(Number::I64(1200))));
        assert!(filter.matches(&Value::Number(Number::F64(1200.0))));
        assert!(!filter.matches(&Value::Number(Number::U64(1201))));
    }

    #[test]
    fn exact_timestamp_and_bool() {
        assert!(Filter::exact("at", Timestamp(5)).matches(&Value::Timestamp(Timestamp(5))));
        assert!(Filter::exact("online", true).matches(&Value::Bool(true)));
        assert!(!Filter::exact("online", true).matches(&Value::Bool(false)));
    }

    #[test]
    fn contains_folds_both_sides() {
        let filter = Filter::contains("location", "UAE");
        assert!(filter.matches(&Value::Text("Dubai, UAE")));
        assert!(filter.matches(&Value::Text("abu dhabi, uae")));
        assert!(!filter.matches(&Value::Text("Riyadh, Saudi Arabia")));
    }

    #[test]
    fn contains_on_tags() {
        let tags = vec!["Machine Learning".to_string()];
        assert!(Filter::contains("topics", "learn").matches(&Value::Tags(&tags)));
    }

    #[test]
    fn any_matches_everything() {
        let filter = Filter::any("role", FilterMode::Exact);
        assert!(filter.matches(&Value::Text("anything")));
        assert!(filter.matches(&Value::None));
        assert!(filter.value().is_any());
    }

    #[test]
    fn absent_field_never_matches() {
        assert!(!Filter::exact("role", "founder").matches(&Value::None));
        assert!(!Filter::contains("location", "uae").matches(&Value::None));
    }

    #[test]
    fn kind_mismatch_never_matches() {
        assert!(!Filter::exact("role", "1").matches(&Value::Number(Number::I64(1))));
        assert!(!Filter::contains("count", "1").matches(&Value::Number(Number::I64(1))));
    }

    #[test]
    fn option_converts_to_filter_value() {
        assert_eq!(FilterValue::from(None::<&str>), FilterValue::Any);
        assert_eq!(
            FilterValue::from(Some("founder")),
            FilterValue::Is(FieldValue::Text("founder".into()))
        );
    }
}
