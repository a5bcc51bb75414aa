use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, PropertyDto};
use crate::models::site::{AboutContent, ContactContent, Feature, Hero, NavItem, ServicesContent};

#[derive(Debug, serde::Serialize)]
pub struct HomePageDto {
    pub agency: &'static str,
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub featured_properties: Vec<PropertyDto>,
}

pub async fn home(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HomePageDto>>, ApiError> {
    let page = state.site().home();
    Ok(Json(ApiResponse::success(HomePageDto {
        agency: page.agency,
        hero: page.hero,
        features: page.features,
        featured_properties: page
            .featured_properties
            .into_iter()
            .map(PropertyDto::from)
            .collect(),
    })))
}

pub async fn about(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<AboutContent>>, ApiError> {
    Ok(Json(ApiResponse::success(state.site().about())))
}

pub async fn services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ServicesContent>>, ApiError> {
    Ok(Json(ApiResponse::success(state.site().services())))
}

pub async fn contact(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ContactContent>>, ApiError> {
    Ok(Json(ApiResponse::success(state.site().contact())))
}

pub async fn navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<NavItem>>>, ApiError> {
    Ok(Json(ApiResponse::success(state.site().navigation())))
}
