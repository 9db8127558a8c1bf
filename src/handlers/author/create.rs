// handlers/author/create.rs - POST /authors handler

use axum::extract::State;

use crate::database::models::Author;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schemas::AuthorCreate;
use crate::state::AppState;

/// Expected input: `{"name": "string", "affiliation": "string (optional)"}`
pub async fn author_create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AuthorCreate>,
) -> ApiResult<Author> {
    let author = state.authors.create(input).await?;
    tracing::info!("Author {} created", author.author_id);
    Ok(ApiResponse::success(author))
}
