//! Where a screen's records come from.

use rolodex_query::Record;

/// A provider of one homogeneous record set.
///
/// Screens borrow records from their source for each evaluation and never
/// modify them.
pub trait RecordSource {
    type Item: Record;

    fn records(&self) -> &[Self::Item];
}

/// A source over an owned, fixed set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSource<T> {
    records: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        StaticSource { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for StaticSource<T> {
    fn default() -> Self {
        StaticSource::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for StaticSource<T> {
    fn from(records: Vec<T>) -> Self {
        StaticSource::new(records)
    }
}

impl<T> FromIterator<T> for StaticSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        StaticSource::new(iter.into_iter().collect())
    }
}

impl<T: Record> RecordSource for StaticSource<T> {
    type Item = T;

    fn records(&self) -> &[T] {
        &self.records
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    type Item = S::Item;

    fn records(&self) -> &[Self::Item] {
        (**self).records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{self, Connection};

    fn total<S: RecordSource>(source: S) -> usize {
        source.records().len()
    }

    #[test]
    fn static_source_exposes_its_records() {
        let source = StaticSource::new(sample::connections());
        assert_eq!(source.len(), 5);
        assert_eq!(total(&source), 5);
        assert_eq!(source.records()[0].name, "Sarah Al-Rashid");
    }

    #[test]
    fn collects_from_iterators() {
        let source: StaticSource<Connection> = sample::connections()
            .into_iter()
            .filter(|c| c.role == "founder")
            .collect();
        assert_eq!(source.len(), 2);
        assert!(StaticSource::<Connection>::default().is_empty());
    }
}
