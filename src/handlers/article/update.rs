// handlers/article/update.rs - PUT /articles/:article_id handler

use axum::extract::State;

use crate::database::models::Article;
use crate::middleware::{ApiResponse, ApiResult, IdPath, ValidatedJson};
use crate::schemas::ArticleUpdate;
use crate::state::AppState;

pub async fn article_update(
    State(state): State<AppState>,
    IdPath(article_id): IdPath<i64>,
    ValidatedJson(input): ValidatedJson<ArticleUpdate>,
) -> ApiResult<Article> {
    let article = state.articles.update(article_id, input).await?;
    Ok(ApiResponse::success(article))
}
