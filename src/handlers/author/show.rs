// handlers/author/show.rs - GET /authors/:author_id handler

use axum::extract::State;

use crate::database::models::Author;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, IdPath};
use crate::state::AppState;

pub async fn author_show(
    State(state): State<AppState>,
    IdPath(author_id): IdPath<i64>,
) -> ApiResult<Author> {
    match state.authors.get_by_id(author_id).await? {
        Some(author) => Ok(ApiResponse::success(author)),
        None => Err(ApiError::not_found("Author not found")),
    }
}
