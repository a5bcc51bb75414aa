//! Catalog-backed implementation of the `ListingService` trait.

use tracing::debug;

use crate::catalog::{Query, Record, RecordStore, SortKey};
use crate::domain::RecordId;
use crate::models::property::{FACET_STATUS, FACET_TYPE, PRICE_BUCKETS};
use crate::models::{Property, PropertyMetric, PropertyType};
use crate::services::listing_service::{
    FilterOption, ListingError, ListingFilters, ListingQuery, ListingResults, ListingService,
};

pub struct CatalogListingService {
    store: RecordStore<Property>,
    default_sort: Option<SortKey<PropertyMetric>>,
}

impl CatalogListingService {
    #[must_use]
    pub const fn new(
        store: RecordStore<Property>,
        default_sort: Option<SortKey<PropertyMetric>>,
    ) -> Self {
        Self {
            store,
            default_sort,
        }
    }

    /// Translates raw filter values into a catalog query. A missing sort
    /// falls back to the configured default; an unrecognized one sorts
    /// nothing.
    fn build_query(&self, request: &ListingQuery) -> Query<PropertyMetric> {
        let sort = match request.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => SortKey::parse(raw),
            _ => self.default_sort,
        };

        let mut query = Query::new()
            .text(request.q.as_deref().unwrap_or_default())
            .range(request.price_range.as_deref().and_then(Property::bucket))
            .sort(sort);

        if let Some(ty) = &request.property_type {
            query = query.facet(FACET_TYPE, ty.as_str());
        }
        if let Some(status) = &request.status {
            query = query.facet(FACET_STATUS, status.as_str());
        }
        query
    }
}

fn sort_label(key: &SortKey<PropertyMetric>) -> String {
    let (low, high) = match key.key {
        PropertyMetric::Price => ("Price: Low to High", "Price: High to Low"),
        PropertyMetric::Size => ("Size: Small to Large", "Size: Large to Small"),
        PropertyMetric::Beds => ("Bedrooms: Fewest First", "Bedrooms: Most First"),
        PropertyMetric::Baths => ("Bathrooms: Fewest First", "Bathrooms: Most First"),
    };
    if key.order.is_ascending() {
        low.to_string()
    } else {
        high.to_string()
    }
}

impl ListingService for CatalogListingService {
    fn search(&self, request: &ListingQuery) -> ListingResults {
        let query = self.build_query(request);
        let properties = self.store.search(&query);

        debug!(
            q = query.text.as_str(),
            range = ?query.range,
            sort = ?query.sort.map(|s| s.to_string()),
            found = properties.len(),
            "Listing search"
        );

        ListingResults {
            total: properties.len(),
            sort: query.sort,
            properties,
        }
    }

    fn get(&self, id: RecordId) -> Result<Property, ListingError> {
        self.store
            .get(id)
            .cloned()
            .ok_or(ListingError::NotFound(id))
    }

    fn featured(&self) -> Vec<Property> {
        self.store
            .all()
            .iter()
            .filter(|p| p.is_featured())
            .cloned()
            .collect()
    }

    fn filters(&self) -> ListingFilters {
        let all = |label: &str| FilterOption {
            value: "all".to_string(),
            label: label.to_string(),
        };

        let property_types = std::iter::once(all("All Types"))
            .chain(PropertyType::ALL.iter().map(|t| FilterOption {
                value: t.as_str().to_lowercase(),
                label: t.as_str().to_string(),
            }))
            .collect();

        let price_ranges = std::iter::once(all("All Prices"))
            .chain(PRICE_BUCKETS.iter().map(|b| FilterOption {
                value: b.name.to_string(),
                label: b.label.to_string(),
            }))
            .collect();

        let sort_options = SortKey::<PropertyMetric>::options()
            .iter()
            .filter(|s| matches!(s.key, PropertyMetric::Price | PropertyMetric::Size))
            .map(|s| FilterOption {
                value: s.to_string(),
                label: sort_label(s),
            })
            .collect();

        ListingFilters {
            property_types,
            price_ranges,
            sort_options,
        }
    }

    fn count(&self) -> usize {
        self.store.len()
    }
}
