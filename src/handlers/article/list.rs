// handlers/article/list.rs - GET /articles handler

use axum::extract::State;

use crate::database::models::Article;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn article_list(State(state): State<AppState>) -> ApiResult<Vec<Article>> {
    let articles = state.articles.get_all().await?;
    Ok(ApiResponse::success(articles))
}
