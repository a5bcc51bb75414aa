use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::{ContactReceipt, ContactRequest};

/// `POST /api/contact`
///
/// Nothing is stored; a valid submission only earns an acknowledgement.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ApiResponse<ContactReceipt>>, ApiError> {
    let receipt = state.contact().submit(request).await?;
    Ok(Json(ApiResponse::success(receipt)))
}
