// handlers/author/delete.rs - DELETE /authors/:author_id handler
// Removing an author also removes every article that references it.

use axum::extract::State;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, IdPath};
use crate::state::AppState;

pub async fn author_delete(
    State(state): State<AppState>,
    IdPath(author_id): IdPath<i64>,
) -> ApiResult<Value> {
    if !state.authors.delete(author_id).await? {
        return Err(ApiError::not_found("Author not found"));
    }

    tracing::info!("Author {} deleted", author_id);
    Ok(ApiResponse::success(json!({
        "message": "Author deleted",
        "author_id": author_id
    })))
}
