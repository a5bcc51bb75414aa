//! The query facade: filter, then stable sort.

use serde::Serialize;

use super::comparator::{SortKey, sort_records};
use super::predicate::{Facets, TextQuery, matches};
use super::record::{NumericKey, RangeFilter, Record};

/// Everything a caller can ask of a catalog in one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<K> {
    pub text: TextQuery,
    pub facets: Facets,
    pub range: Option<RangeFilter<K>>,
    pub sort: Option<SortKey<K>>,
}

impl<K> Default for Query<K> {
    fn default() -> Self {
        Self {
            text: TextQuery::default(),
            facets: Facets::default(),
            range: None,
            sort: None,
        }
    }
}

impl<K: NumericKey> Query<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, raw: &str) -> Self {
        self.text = TextQuery::new(raw);
        self
    }

    #[must_use]
    pub fn facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.set(facet, value);
        self
    }

    #[must_use]
    pub const fn range(mut self, range: Option<RangeFilter<K>>) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: Option<SortKey<K>>) -> Self {
        self.sort = sort;
        self
    }
}

/// Returns the records matching `query`, ordered by its sort key.
///
/// The input is never modified; the result is a fresh vector.
pub fn search<R: Record>(records: &[R], query: &Query<R::Key>) -> Vec<R> {
    let mut results: Vec<R> = records
        .iter()
        .filter(|record| matches(*record, &query.text, &query.facets, query.range.as_ref()))
        .cloned()
        .collect();
    sort_records(&mut results, query.sort.as_ref());
    results
}

/// A result split by the `featured` flag, order preserved within each half.
#[derive(Debug, Clone, Serialize)]
pub struct Partitioned<R> {
    pub featured: Vec<R>,
    pub regular: Vec<R>,
}

impl<R> Partitioned<R> {
    pub fn total(&self) -> usize {
        self.featured.len() + self.regular.len()
    }
}

pub fn partition_featured<R: Record>(records: Vec<R>) -> Partitioned<R> {
    let (featured, regular): (Vec<R>, Vec<R>) =
        records.into_iter().partition(|record| record.is_featured());
    Partitioned { featured, regular }
}
