use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use super::record::{NumericKey, Record};
use crate::domain::SortOrder;

/// A numeric attribute plus a direction, e.g. `price-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey<K> {
    pub key: K,
    pub order: SortOrder,
}

impl<K: NumericKey> SortKey<K> {
    #[must_use]
    pub const fn new(key: K, order: SortOrder) -> Self {
        Self { key, order }
    }

    #[must_use]
    pub const fn ascending(key: K) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    #[must_use]
    pub const fn descending(key: K) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    /// Parses `<key>-<asc|desc>`; `_` works as a separator too, so
    /// `price_desc` and `read-time-asc` both resolve. Unknown keys or
    /// directions give `None`, which sorts nothing.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let split = raw.rfind(['-', '_'])?;
        let (key, order) = (&raw[..split], &raw[split + 1..]);
        Some(Self::new(K::parse(key)?, SortOrder::parse(order)?))
    }

    /// Every key in both directions, descending first, as the listing page
    /// offers them.
    #[must_use]
    pub fn options() -> Vec<Self> {
        K::ALL
            .iter()
            .flat_map(|&key| [Self::descending(key), Self::ascending(key)])
            .collect()
    }

    pub fn compare<R: Record<Key = K>>(&self, a: &R, b: &R) -> Ordering {
        let ordering = a.numeric(self.key).total_cmp(&b.numeric(self.key));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl<K: NumericKey> fmt::Display for SortKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.key.name(), self.order.as_str())
    }
}

impl<K: NumericKey> Serialize for SortKey<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Orders two records by `sort`. Without a sort key every pair is equal.
pub fn compare<R: Record>(a: &R, b: &R, sort: Option<&SortKey<R::Key>>) -> Ordering {
    sort.map_or(Ordering::Equal, |sort| sort.compare(a, b))
}

/// Sorts in place with a stable sort, so records with equal values keep
/// their store order.
pub fn sort_records<R: Record>(records: &mut [R], sort: Option<&SortKey<R::Key>>) {
    if sort.is_some() {
        records.sort_by(|a, b| compare(a, b, sort));
    }
}
