//! Listing page endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::validation::{validate_record_id, validate_search_query};
use super::{ApiError, ApiResponse, AppState, ListingsResponse, PropertyDto};
use crate::services::{ListingFilters, ListingQuery};

/// `GET /api/listings?q=&type=&status=&price_range=&sort=`
pub async fn search_listings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ApiResponse<ListingsResponse>>, ApiError> {
    validate_search_query(query.q.as_deref())?;
    let results = state.listings().search(&query);
    Ok(Json(ApiResponse::success(results.into())))
}

pub async fn featured_listings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    let featured = state
        .listings()
        .featured()
        .into_iter()
        .map(PropertyDto::from)
        .collect();
    Ok(Json(ApiResponse::success(featured)))
}

pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<PropertyDto>>, ApiError> {
    let id = validate_record_id(id)?;
    let property = state.listings().get(id)?;
    Ok(Json(ApiResponse::success(property.into())))
}

/// Options for the type, price and sort dropdowns.
pub async fn listing_filters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ListingFilters>>, ApiError> {
    Ok(Json(ApiResponse::success(state.listings().filters())))
}
