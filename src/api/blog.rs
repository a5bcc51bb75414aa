//! Blog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::validation::{validate_record_id, validate_search_query};
use super::{ApiError, ApiResponse, AppState, ArticleDto, BlogResponse};
use crate::services::BlogQuery;

/// `GET /api/blog?q=&category=&author=`
///
/// Matches are split into the featured and regular sections.
pub async fn search_blog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogQuery>,
) -> Result<Json<ApiResponse<BlogResponse>>, ApiError> {
    validate_search_query(query.q.as_deref())?;
    let results = state.blog().search(&query);
    Ok(Json(ApiResponse::success(results.into())))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<ArticleDto>>, ApiError> {
    let id = validate_record_id(id)?;
    let article = state.blog().get(id)?;
    Ok(Json(ApiResponse::success(article.into())))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    Ok(Json(ApiResponse::success(state.blog().categories())))
}
