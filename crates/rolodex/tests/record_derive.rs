//! Integration tests for the Record derive macro.
//!
//! These tests check the generated schema, field constants and accessor
//! against hand-written expectations.

#![allow(dead_code)] // Some fields are intentionally left out of queries

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rolodex::{
    FieldKind, Number, Query, Record, RecordQueryEngine, Timestamp, Value,
};

// =============================================================================
// Basic derive tests
// =============================================================================

#[derive(Record)]
struct Member {
    #[field(Text)]
    name: String,

    #[field(Number)]
    posts: u32,

    #[field(Bool)]
    verified: bool,

    avatar_url: String,
}

fn member() -> Member {
    Member {
        name: "Hana Saleh".to_string(),
        posts: 12,
        verified: true,
        avatar_url: "/a.png".to_string(),
    }
}

#[test]
fn test_field_values() {
    let m = member();
    assert_eq!(m.field_value("name"), Value::Text("Hana Saleh"));
    assert_eq!(m.field_value("posts"), Value::Number(Number::U64(12)));
    assert_eq!(m.field_value("verified"), Value::Bool(true));
}

#[test]
fn test_field_constants_generated() {
    assert_eq!(Member::NAME, "name");
    assert_eq!(Member::POSTS, "posts");
    assert_eq!(Member::VERIFIED, "verified");
}

#[test]
fn test_unannotated_and_unknown_fields_are_absent() {
    let m = member();
    assert_eq!(m.field_value("avatar_url"), Value::None);
    assert_eq!(m.field_value("unknown"), Value::None);
    assert_eq!(m.field_value(""), Value::None);
}

#[test]
fn test_schema_lists_annotated_fields_in_order() {
    let schema = Member::schema();
    let fields: Vec<_> = schema
        .fields()
        .iter()
        .map(|f| (f.name.as_str(), f.kind))
        .collect();
    assert_eq!(
        fields,
        [
            ("name", FieldKind::Text),
            ("posts", FieldKind::Number),
            ("verified", FieldKind::Bool)
        ]
    );
}

#[test]
fn test_accessor_function() {
    let m = member();
    assert_eq!(Member::accessor(&m, "name"), Value::Text("Hana Saleh"));
}

// =============================================================================
// Number types
// =============================================================================

#[derive(Record)]
struct Numbers {
    #[field(Number)]
    small: i8,
    #[field(Number)]
    signed: i64,
    #[field(Number)]
    unsigned: u64,
    #[field(Number)]
    ratio: f64,
}

#[test]
fn test_number_variants_are_preserved() {
    let n = Numbers {
        small: -3,
        signed: -40,
        unsigned: 7,
        ratio: 0.5,
    };
    assert_eq!(n.field_value("small"), Value::Number(Number::I64(-3)));
    assert_eq!(n.field_value("signed"), Value::Number(Number::I64(-40)));
    assert_eq!(n.field_value("unsigned"), Value::Number(Number::U64(7)));
    assert_eq!(n.field_value("ratio"), Value::Number(Number::F64(0.5)));
}

// =============================================================================
// Timestamps, tags, optional fields, rename, skip
// =============================================================================

#[derive(Record)]
struct Meetup {
    #[field(Text)]
    title: String,

    #[field(Timestamp)]
    starts_at: DateTime<Utc>,

    #[field(Date)]
    announced: NaiveDate,

    #[field(Timestamp, rename = "created")]
    created_millis: i64,

    #[field(Tags)]
    tags: Vec<String>,

    #[field(Text, optional)]
    venue: Option<String>,

    #[field(Number, optional, rename = "capacity")]
    max_attendees: Option<u32>,

    #[field(skip)]
    internal_id: u64,
}

fn meetup(venue: Option<&str>, capacity: Option<u32>) -> Meetup {
    Meetup {
        title: "Rust Dubai".to_string(),
        starts_at: Utc.with_ymd_and_hms(2024, 4, 2, 18, 0, 0).unwrap(),
        announced: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        created_millis: 1_000,
        tags: vec!["rust".to_string(), "meetup".to_string()],
        venue: venue.map(str::to_string),
        max_attendees: capacity,
        internal_id: 99,
    }
}

#[test]
fn test_timestamp_fields() {
    let m = meetup(None, None);
    let starts = Utc.with_ymd_and_hms(2024, 4, 2, 18, 0, 0).unwrap();
    assert_eq!(m.field_value("starts_at"), Value::Timestamp(Timestamp::from(starts)));

    let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    assert_eq!(m.field_value("announced"), Value::Timestamp(Timestamp::from(midnight)));
    assert_eq!(m.field_value("created"), Value::Timestamp(Timestamp(1_000)));
}

#[test]
fn test_tags_field() {
    let m = meetup(None, None);
    match m.field_value("tags") {
        Value::Tags(tags) => assert_eq!(tags, ["rust", "meetup"]),
        other => panic!("expected tags, got {:?}", other),
    }
}

#[test]
fn test_optional_fields() {
    let present = meetup(Some("Dubai Internet City"), Some(80));
    assert_eq!(present.field_value("venue"), Value::Text("Dubai Internet City"));
    assert_eq!(present.field_value("capacity"), Value::Number(Number::U64(80)));

    let absent = meetup(None, None);
    assert_eq!(absent.field_value("venue"), Value::None);
    assert_eq!(absent.field_value("capacity"), Value::None);
}

#[test]
fn test_rename_and_skip() {
    assert_eq!(Meetup::CREATED, "created");
    assert_eq!(Meetup::CAPACITY, "capacity");

    let schema = Meetup::schema();
    assert!(schema.contains("created"));
    assert!(!schema.contains("created_millis"));
    assert!(!schema.contains("internal_id"));
    assert_eq!(schema.kind_of("announced"), Some(FieldKind::Timestamp));
    assert_eq!(schema.kind_of("tags"), Some(FieldKind::Tags));
    assert_eq!(schema.len(), 7);
}

// =============================================================================
// Derived records in queries
// =============================================================================

#[test]
fn test_derived_record_with_engine() {
    let meetups = vec![
        meetup(Some("Dubai Internet City"), Some(80)),
        meetup(None, Some(500)),
        meetup(Some("Hub71, Abu Dhabi"), None),
    ];
    let engine = RecordQueryEngine::for_record::<Meetup>();

    let query = Query::new().order_desc(Meetup::CAPACITY);
    let capacities: Vec<_> = engine
        .evaluate(&meetups, &query)
        .unwrap()
        .iter()
        .map(|m| m.max_attendees)
        .collect();
    assert_eq!(capacities, [Some(500), Some(80), None]);

    let query = Query::new().filter_contains(Meetup::VENUE, "abu dhabi");
    assert_eq!(engine.count(&meetups, &query).unwrap(), 1);

    let query = Query::new().filter_eq(Meetup::TAGS, "rust");
    assert_eq!(engine.count(&meetups, &query).unwrap(), 3);
}

#[derive(Record)]
struct Tagged<T> {
    #[field(Text)]
    label: String,
    payload: T,
}

#[test]
fn test_generic_structs() {
    let items = vec![
        Tagged { label: "b".to_string(), payload: 2u8 },
        Tagged { label: "a".to_string(), payload: 1u8 },
    ];
    let engine = RecordQueryEngine::for_record::<Tagged<u8>>();
    let sorted = engine
        .evaluate(&items, &Query::new().order_asc(Tagged::<u8>::LABEL))
        .unwrap();
    assert_eq!(sorted[0].payload, 1);
}
