//! Property-based tests for the query engine using proptest.

use proptest::prelude::*;
use rolodex_query::{
    Comparator, Dir, Number, PageRequest, Query, Record, RecordQueryEngine, Schema, SortKey,
    Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Member {
    name: String,
    role: String,
    score: i64,
    city: Option<String>,
}

impl Record for Member {
    fn schema() -> Schema {
        Schema::builder()
            .text("name")
            .text("role")
            .number("score")
            .text("city")
            .build()
            .unwrap()
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::Text(&self.name),
            "role" => Value::Text(&self.role),
            "score" => Value::Number(Number::I64(self.score)),
            "city" => self.city.as_deref().map_or(Value::None, Value::Text),
            _ => Value::None,
        }
    }
}

#[derive(Debug, Clone)]
struct Reading {
    score: f64,
}

impl Record for Reading {
    fn schema() -> Schema {
        Schema::builder().number("score").build().unwrap()
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "score" => Value::Number(Number::F64(self.score)),
            _ => Value::None,
        }
    }
}

fn readings() -> impl Strategy<Value = Vec<Reading>> {
    let score = prop_oneof![
        3 => -1000.0f64..1000.0,
        1 => Just(f64::NAN),
    ];
    prop::collection::vec(score.prop_map(|score| Reading { score }), 0..80)
}

static ROLES: [&str; 4] = ["founder", "engineer", "investor", "designer"];

fn member_strategy() -> impl Strategy<Value = Member> {
    (
        "[A-Za-z]{1,8}( [A-Za-z]{1,8})?",
        prop::sample::select(&ROLES[..]),
        0i64..10,
        prop::option::of("[a-z]{3,8}"),
    )
        .prop_map(|(name, role, score, city)| Member {
            name,
            role: role.to_string(),
            score,
            city,
        })
}

fn members() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::vec(member_strategy(), 0..60)
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    let field = prop::sample::select(vec!["name", "score", "city"]);
    let dir = prop_oneof![Just(Dir::Asc), Just(Dir::Desc)];
    (field, dir).prop_map(|(field, dir)| {
        let comparator = if field == "score" {
            Comparator::Natural
        } else {
            Comparator::Collated
        };
        SortKey::new(field, dir, comparator)
    })
}

fn engine() -> RecordQueryEngine {
    RecordQueryEngine::for_record::<Member>()
}

fn position(items: &[Member], item: &Member) -> usize {
    items
        .iter()
        .position(|x| std::ptr::eq(x, item))
        .expect("result references an input element")
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Results only reference input elements, each at most once.
    #[test]
    fn results_are_a_subset_without_duplicates(
        items in members(),
        needle in "[a-z]{0,2}",
        key in sort_key_strategy(),
    ) {
        let query = Query::new().search(needle, ["name", "city"]).sort_by(key);
        let results = engine().evaluate(&items, &query).unwrap();

        prop_assert!(results.len() <= items.len());
        let mut seen: Vec<usize> = results.iter().map(|m| position(&items, m)).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), results.len());
    }

    /// Adding a constraining filter never adds results.
    #[test]
    fn extra_filter_narrows(
        items in members(),
        needle in "[a-z]{0,1}",
        role in prop::sample::select(&ROLES[..]),
    ) {
        let base = Query::new().search(needle.clone(), ["name"]).filter_any("role");
        let narrowed = Query::new().search(needle, ["name"]).filter_eq("role", role);

        let wide = engine().evaluate(&items, &base).unwrap();
        let narrow = engine().evaluate(&items, &narrowed).unwrap();

        for m in &narrow {
            prop_assert!(wide.iter().any(|w| std::ptr::eq(*w, *m)));
            prop_assert_eq!(m.role.as_str(), role);
        }
    }

    /// Empty search with only "any" filters keeps every record.
    #[test]
    fn empty_search_is_identity_filter(items in members(), key in sort_key_strategy()) {
        let query = Query::new()
            .search("", ["name"])
            .filter_any("role")
            .filter_any("city")
            .sort_by(key);

        let results = engine().evaluate(&items, &query).unwrap();
        prop_assert_eq!(results.len(), items.len());
    }

    /// Same query, same input, same output.
    #[test]
    fn evaluation_is_deterministic(
        items in members(),
        needle in "[a-z]{0,2}",
        key in sort_key_strategy(),
    ) {
        let query = Query::new().search(needle, ["name"]).sort_by(key);
        let first = engine().evaluate(&items, &query).unwrap();
        let second = engine().evaluate(&items, &query).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    /// Records with equal sort keys keep their input order.
    #[test]
    fn sort_is_stable(items in members(), dir in prop_oneof![Just(Dir::Asc), Just(Dir::Desc)]) {
        let query = Query::new().order_by("score", dir);
        let results = engine().evaluate(&items, &query).unwrap();

        for pair in results.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            if prev.score == curr.score {
                prop_assert!(position(&items, prev) < position(&items, curr));
            } else if dir == Dir::Asc {
                prop_assert!(prev.score < curr.score);
            } else {
                prop_assert!(prev.score > curr.score);
            }
        }
    }

    /// Records without a city come after every record with one.
    #[test]
    fn absent_values_sort_last(
        items in members(),
        dir in prop_oneof![Just(Dir::Asc), Just(Dir::Desc)],
    ) {
        let query = Query::new().sort_by(SortKey::collated("city").with_dir(dir));
        let results = engine().evaluate(&items, &query).unwrap();

        let first_absent = results.iter().position(|m| m.city.is_none()).unwrap_or(results.len());
        prop_assert!(results[first_absent..].iter().all(|m| m.city.is_none()));
    }

    /// Count agrees with the unwindowed result length.
    #[test]
    fn count_equals_evaluate_len(items in members(), role in prop::sample::select(&ROLES[..])) {
        let query = Query::new().filter_eq("role", role);
        let counted = engine().count(&items, &query).unwrap();
        prop_assert_eq!(counted, engine().evaluate(&items, &query).unwrap().len());
    }

    /// Concatenating every page reproduces the full sorted result.
    #[test]
    fn pages_partition_results(items in members(), size in 1usize..15) {
        let query = Query::new().order_desc("score");
        let all = engine().evaluate(&items, &query).unwrap();

        let first = engine()
            .evaluate_page(&items, &query, PageRequest::first(size).unwrap())
            .unwrap();
        let mut joined = Vec::new();
        for number in 1..=first.page_count() {
            let page = engine()
                .evaluate_page(&items, &query, PageRequest::new(number, size).unwrap())
                .unwrap();
            prop_assert!(page.len() <= size);
            joined.extend(page.items);
        }

        prop_assert_eq!(joined.len(), all.len());
        for (a, b) in joined.iter().zip(all.iter()) {
            prop_assert!(std::ptr::eq(*a, *b));
        }
    }

    /// NaN scores go last and every other score comes out ordered.
    #[test]
    fn nan_scores_do_not_disturb_order(
        items in readings(),
        dir in prop_oneof![Just(Dir::Asc), Just(Dir::Desc)],
    ) {
        let engine = RecordQueryEngine::for_record::<Reading>();
        let results = engine.evaluate(&items, &Query::new().order_by("score", dir)).unwrap();
        prop_assert_eq!(results.len(), items.len());

        let first_nan = results.iter().position(|r| r.score.is_nan()).unwrap_or(results.len());
        prop_assert!(results[first_nan..].iter().all(|r| r.score.is_nan()));

        for pair in results[..first_nan].windows(2) {
            let (prev, curr) = (pair[0].score, pair[1].score);
            if dir == Dir::Asc {
                prop_assert!(prev <= curr, "{} before {}", prev, curr);
            } else {
                prop_assert!(prev >= curr, "{} before {}", prev, curr);
            }
        }
    }

    /// Offset and limit never exceed what is available.
    #[test]
    fn window_respects_bounds(items in members(), offset in 0usize..70, limit in 0usize..30) {
        let query = Query::new().offset(offset).limit(limit);
        let results = engine().evaluate(&items, &query).unwrap();

        prop_assert!(results.len() <= limit);
        prop_assert!(results.len() <= items.len().saturating_sub(offset));
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_collection_returns_empty() {
    let items: Vec<Member> = vec![];
    let query = Query::new().filter_eq("role", "founder").order_asc("score");

    assert!(engine().evaluate(&items, &query).unwrap().is_empty());
    assert_eq!(engine().count(&items, &query).unwrap(), 0);
    assert!(!engine().any(&items, &query).unwrap());
    assert!(engine().find(&items, &query).unwrap().is_none());
}

#[test]
fn limit_zero_returns_empty() {
    let items = vec![Member {
        name: "Omar".into(),
        role: "engineer".into(),
        score: 1,
        city: None,
    }];
    let query = Query::new().limit(0);

    assert!(engine().evaluate(&items, &query).unwrap().is_empty());
}
