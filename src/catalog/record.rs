use std::fmt;
use std::hash::Hash;

use crate::domain::RecordId;

/// A numeric attribute of a record type that can be sorted on or bucketed.
///
/// Each record type declares a closed enum of keys, so a comparator can never
/// ask a record for a key it does not carry.
pub trait NumericKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every key of the record type, in the order options are offered.
    const ALL: &'static [Self];

    /// Canonical wire name, e.g. `price`.
    fn name(&self) -> &'static str;

    /// Extra names accepted by [`NumericKey::parse`], e.g. `sqft` for size.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Looks a key up by name or alias. `_` and `-` are interchangeable and
    /// case is ignored.
    fn parse(raw: &str) -> Option<Self> {
        let wanted = normalize_name(raw);
        Self::ALL.iter().copied().find(|key| {
            normalize_name(key.name()) == wanted
                || key.aliases().iter().any(|a| normalize_name(a) == wanted)
        })
    }
}

pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

/// A named numeric range offered as a coarse filter, e.g. "$1M - $2M".
///
/// The range is half open: `min <= value < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket<K> {
    pub name: &'static str,
    pub label: &'static str,
    pub key: K,
    pub min: f64,
    pub max: f64,
}

impl<K: NumericKey> Bucket<K> {
    #[must_use]
    pub const fn range(&self) -> RangeFilter<K> {
        RangeFilter {
            key: self.key,
            min: self.min,
            max: self.max,
        }
    }
}

/// An active numeric range filter over one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<K> {
    pub key: K,
    pub min: f64,
    pub max: f64,
}

impl<K: NumericKey> RangeFilter<K> {
    #[must_use]
    pub const fn new(key: K, min: f64, max: f64) -> Self {
        Self { key, min, max }
    }

    /// Range with no upper bound.
    #[must_use]
    pub const fn at_least(key: K, min: f64) -> Self {
        Self::new(key, min, f64::INFINITY)
    }

    /// Range starting at zero.
    #[must_use]
    pub const fn below(key: K, max: f64) -> Self {
        Self::new(key, 0.0, max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// One entry of an in-memory catalog.
///
/// Implementors are plain data: the trait only exposes what the predicate and
/// comparator engines need to see.
pub trait Record: Clone + Send + Sync + 'static {
    type Key: NumericKey;

    /// Facet names this record type can be filtered on. Filters naming any
    /// other facet are ignored.
    const FACETS: &'static [&'static str];

    /// Named range buckets offered for this record type.
    const BUCKETS: &'static [Bucket<Self::Key>] = &[];

    fn id(&self) -> RecordId;

    fn title(&self) -> &str;

    /// Text attributes eligible for free-text matching, in order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// The record's value for one of [`Record::FACETS`].
    fn facet_value(&self, facet: &str) -> Option<&str>;

    fn numeric(&self, key: Self::Key) -> f64;

    fn is_featured(&self) -> bool {
        false
    }

    /// Resolves a bucket name into a range filter.
    ///
    /// `all`, an empty name and unknown names resolve to `None`, which means
    /// no range filtering at all.
    fn bucket(name: &str) -> Option<RangeFilter<Self::Key>> {
        let name = name.trim();
        Self::BUCKETS
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .map(Bucket::range)
    }

    fn knows_facet(facet: &str) -> bool {
        Self::FACETS.iter().any(|f| f.eq_ignore_ascii_case(facet.trim()))
    }
}
