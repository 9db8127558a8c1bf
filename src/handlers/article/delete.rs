// handlers/article/delete.rs - DELETE /articles/:article_id handler

use axum::extract::State;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, IdPath};
use crate::state::AppState;

pub async fn article_delete(
    State(state): State<AppState>,
    IdPath(article_id): IdPath<i64>,
) -> ApiResult<Value> {
    if !state.articles.delete(article_id).await? {
        return Err(ApiError::not_found("Article not found"));
    }

    tracing::info!("Article {} deleted", article_id);
    Ok(ApiResponse::success(json!({
        "message": "Article deleted",
        "article_id": article_id
    })))
}
