//! Record predicates: free text, categorical facets and one numeric range.
//!
//! Every predicate here is a pure function of the record and the filter
//! values. Filters that cannot be interpreted are treated as absent.

use super::record::{RangeFilter, Record};

/// Sentinel facet value meaning "do not filter on this facet".
pub const ALL: &str = "all";

/// Unicode lowercase, shared by text and facet matching.
fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// A lowercased free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: fold_case(raw),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True when any searchable field contains the query, ignoring case.
    /// The empty query matches every record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.is_empty() {
            return true;
        }
        record
            .searchable_fields()
            .into_iter()
            .any(|field| fold_case(field).contains(&self.needle))
    }
}

impl From<&str> for TextQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Categorical filters, AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    filters: Vec<(String, String)>,
}

impl Facets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a facet filter. Setting the same facet twice keeps the last value.
    #[must_use]
    pub fn with(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    pub fn set(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        let facet = facet.into();
        let value = value.into();
        if let Some(existing) = self
            .filters
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&facet))
        {
            existing.1 = value;
        } else {
            self.filters.push((facet, value));
        }
    }

    /// Filters that actually constrain the result: neither empty nor `all`.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(facet, value)| (facet.as_str(), value.trim()))
            .filter(|(_, value)| !value.is_empty() && !value.eq_ignore_ascii_case(ALL))
    }

    /// Every active facet the record type knows must equal the record's value,
    /// ignoring case with the same folding as [`TextQuery`]. Facets the record
    /// type does not know are skipped.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.active()
            .filter(|(facet, _)| R::knows_facet(facet))
            .all(|(facet, wanted)| {
                record
                    .facet_value(facet)
                    .is_some_and(|actual| fold_case(actual) == fold_case(wanted))
            })
    }
}

/// Full predicate: text AND every facet AND the range, if one is active.
pub fn matches<R: Record>(
    record: &R,
    text: &TextQuery,
    facets: &Facets,
    range: Option<&RangeFilter<R::Key>>,
) -> bool {
    text.matches(record)
        && facets.matches(record)
        && range.is_none_or(|range| range.contains(record.numeric(range.key)))
}
