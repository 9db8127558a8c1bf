// handlers/article/show.rs - GET /articles/:article_id handler

use axum::extract::State;

use crate::database::models::Article;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, IdPath};
use crate::state::AppState;

pub async fn article_show(
    State(state): State<AppState>,
    IdPath(article_id): IdPath<i64>,
) -> ApiResult<Article> {
    state
        .articles
        .get_by_id(article_id)
        .await?
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}
