use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{BlogService, ContactService, ListingService, SiteService};
use crate::state::SharedState;

mod blog;
mod contact;
mod error;
mod listings;
mod observability;
mod site;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn listings(&self) -> &Arc<dyn ListingService> {
        &self.shared.listings
    }

    #[must_use]
    pub fn blog(&self) -> &Arc<dyn BlogService> {
        &self.shared.blog
    }

    #[must_use]
    pub fn contact(&self) -> &Arc<dyn ContactService> {
        &self.shared.contact
    }

    #[must_use]
    pub fn site(&self) -> &Arc<SiteService> {
        &self.shared.site
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config)?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/listings", get(listings::search_listings))
        .route("/listings/featured", get(listings::featured_listings))
        .route("/listings/filters", get(listings::listing_filters))
        .route("/listings/{id}", get(listings::get_listing))
        .route("/blog", get(blog::search_blog))
        .route("/blog/categories", get(blog::list_categories))
        .route("/blog/{id}", get(blog::get_article))
        .route("/site/home", get(site::home))
        .route("/site/about", get(site::about))
        .route("/site/services", get(site::services))
        .route("/site/contact", get(site::contact))
        .route("/site/navigation", get(site::navigation))
        .route("/contact", post(contact::submit_contact))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
