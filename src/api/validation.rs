use super::ApiError;
use crate::domain::RecordId;

/// Longest free-text query accepted by the search endpoints.
pub const MAX_QUERY_LEN: usize = 200;

pub fn validate_record_id(id: u32) -> Result<RecordId, ApiError> {
    if id == 0 {
        return Err(ApiError::validation(format!(
            "Invalid ID: {}. ID must be a positive integer",
            id
        )));
    }
    Ok(RecordId::new(id))
}

/// Search text may be empty (no filtering) but not unbounded.
pub fn validate_search_query(query: Option<&str>) -> Result<(), ApiError> {
    if let Some(q) = query
        && q.chars().count() > MAX_QUERY_LEN
    {
        return Err(ApiError::validation(format!(
            "Search query must be {} characters or less",
            MAX_QUERY_LEN
        )));
    }
    Ok(())
}
