// handlers/author/update.rs - PUT /authors/:author_id handler

use axum::extract::State;

use crate::database::models::Author;
use crate::middleware::{ApiResponse, ApiResult, IdPath, ValidatedJson};
use crate::schemas::AuthorUpdate;
use crate::state::AppState;

/// Only the fields present in the body are changed
pub async fn author_update(
    State(state): State<AppState>,
    IdPath(author_id): IdPath<i64>,
    ValidatedJson(input): ValidatedJson<AuthorUpdate>,
) -> ApiResult<Author> {
    let author = state.authors.update(author_id, input).await?;
    Ok(ApiResponse::success(author))
}
