use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::catalog::{CatalogSource, JsonFileSource, Record, RecordStore, StaticSource};
use crate::config::Config;
use crate::data;
use crate::models::{Article, Property};
use crate::services::{
    BlogService, CatalogBlogService, CatalogListingService, ContactService, ListingService,
    SimulatedContactService, SiteService,
};

/// Loads a catalog from `path` when one is configured, otherwise from the
/// compiled-in seed data.
fn load_store<R>(
    path: Option<&str>,
    fallback: StaticSource<R>,
) -> anyhow::Result<RecordStore<R>>
where
    R: Record + DeserializeOwned,
{
    let source: Box<dyn CatalogSource<R>> = match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(fallback),
    };

    RecordStore::load(source.as_ref())
        .with_context(|| format!("Failed to load {} catalog", source.name()))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub listings: Arc<dyn ListingService>,

    pub blog: Arc<dyn BlogService>,

    pub contact: Arc<dyn ContactService>,

    pub site: Arc<SiteService>,
}

impl SharedState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let properties = load_store(
            config.catalog.listings_path.as_deref(),
            StaticSource::new("properties", data::properties),
        )?;
        let articles = load_store(
            config.catalog.articles_path.as_deref(),
            StaticSource::new("articles", data::articles),
        )?;

        Ok(Self::from_stores(config, properties, articles))
    }

    /// Wires the services around already loaded catalogs.
    #[must_use]
    pub fn from_stores(
        config: Config,
        properties: RecordStore<Property>,
        articles: RecordStore<Article>,
    ) -> Self {
        let listings = Arc::new(CatalogListingService::new(
            properties,
            config.default_listing_sort(),
        )) as Arc<dyn ListingService>;

        let blog = Arc::new(CatalogBlogService::new(articles)) as Arc<dyn BlogService>;

        let contact = Arc::new(SimulatedContactService::new(
            config.contact_acknowledgement(),
        )) as Arc<dyn ContactService>;

        let site = Arc::new(SiteService::new(listings.clone()));

        Self {
            config: Arc::new(config),
            listings,
            blog,
            contact,
            site,
        }
    }
}
