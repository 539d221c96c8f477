//! Implementation of the `#[derive(Record)]` macro.
//!
//! Reads `#[field(...)]` annotations and generates the schema, the field
//! accessor and field name constants.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
