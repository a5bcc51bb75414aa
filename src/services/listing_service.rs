//! Domain service for property listings.
//!
//! Wraps the listings catalog: search with the listing page's filters, lookup
//! by id, the home page's featured selection and the filter options a client
//! needs to build its dropdowns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::SortKey;
use crate::domain::RecordId;
use crate::models::{Property, PropertyMetric};

/// Listing page filter state, as raw strings from the caller.
///
/// Missing values and the sentinel `all` leave a filter off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub q: Option<String>,
    #[serde(rename = "type", alias = "property_type")]
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub price_range: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingResults {
    pub total: usize,
    /// Sort key actually applied; `None` when the requested one was not
    /// recognized and store order was kept.
    pub sort: Option<SortKey<PropertyMetric>>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingFilters {
    pub property_types: Vec<FilterOption>,
    pub price_ranges: Vec<FilterOption>,
    pub sort_options: Vec<FilterOption>,
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Property {0} not found")]
    NotFound(RecordId),
}

pub trait ListingService: Send + Sync {
    fn search(&self, query: &ListingQuery) -> ListingResults;

    fn get(&self, id: RecordId) -> Result<Property, ListingError>;

    /// Properties flagged for the home page, in store order.
    fn featured(&self) -> Vec<Property>;

    fn filters(&self) -> ListingFilters;

    fn count(&self) -> usize;
}
