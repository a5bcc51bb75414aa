//! System API endpoints.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CatalogCounts, SystemStatus};

/// Returns version, uptime and catalog sizes.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        catalogs: CatalogCounts {
            properties: state.listings().count(),
            articles: state.blog().count(),
        },
        default_listing_sort: state.config().catalog.default_listing_sort.clone(),
    };

    Ok(Json(ApiResponse::success(status)))
}
