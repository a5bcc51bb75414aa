//! Page content for the brochure pages.

use std::sync::Arc;

use serde::Serialize;

use crate::data::site;
use crate::models::Property;
use crate::models::site::{
    AboutContent, ContactContent, Feature, Hero, NavItem, ServicesContent,
};
use crate::services::ListingService;

/// The home page shows at most this many featured listings.
pub const HOME_FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub agency: &'static str,
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub featured_properties: Vec<Property>,
}

pub struct SiteService {
    listings: Arc<dyn ListingService>,
}

impl SiteService {
    #[must_use]
    pub fn new(listings: Arc<dyn ListingService>) -> Self {
        Self { listings }
    }

    #[must_use]
    pub fn home(&self) -> HomePage {
        let mut featured_properties = self.listings.featured();
        featured_properties.truncate(HOME_FEATURED_LIMIT);

        HomePage {
            agency: site::AGENCY_NAME,
            hero: site::home_hero(),
            features: site::home_features(),
            featured_properties,
        }
    }

    #[must_use]
    pub fn about(&self) -> AboutContent {
        site::about()
    }

    #[must_use]
    pub fn services(&self) -> ServicesContent {
        site::services()
    }

    #[must_use]
    pub fn contact(&self) -> ContactContent {
        site::contact()
    }

    #[must_use]
    pub fn navigation(&self) -> Vec<NavItem> {
        site::navigation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RecordStore, SortKey, StaticSource};
    use crate::data;
    use crate::services::CatalogListingService;

    fn service() -> SiteService {
        let store: RecordStore<Property> =
            RecordStore::load(&StaticSource::new("properties", data::properties)).unwrap();
        SiteService::new(Arc::new(CatalogListingService::new(
            store,
            SortKey::parse("price-desc"),
        )))
    }

    #[test]
    fn home_shows_featured_listings_in_store_order() {
        let home = service().home();
        let ids: Vec<u32> = home
            .featured_properties
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(home.agency, "Lion Homes");
    }

    #[test]
    fn navigation_covers_every_page() {
        let names: Vec<&str> = service().navigation().iter().map(|n| n.name).collect();
        assert_eq!(
            names,
            vec!["Home", "About", "Services", "Listings", "Blog", "Contact"]
        );
    }

    #[test]
    fn contact_page_offers_the_service_interests() {
        let contact = service().contact();
        assert!(contact.service_interests.contains(&"Property Selling"));
        assert_eq!(contact.contact_methods.len(), 4);
    }
}
