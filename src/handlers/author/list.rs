// handlers/author/list.rs - GET /authors handler

use axum::extract::State;

use crate::database::models::Author;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn author_list(State(state): State<AppState>) -> ApiResult<Vec<Author>> {
    let authors = state.authors.get_all().await?;
    Ok(ApiResponse::success(authors))
}
