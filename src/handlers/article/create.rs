// handlers/article/create.rs - POST /articles handler

use axum::extract::State;

use crate::database::models::Article;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schemas::ArticleCreate;
use crate::state::AppState;

/**
 * POST /articles - Create an article for an existing author
 *
 * Expected Input:
 * ```json
 * {
 *   "title": "string",          // Required, 1-255 characters
 *   "content": "string",        // Required
 *   "author_id": 1,             // Required, must reference an author
 *   "published_date": "RFC3339" // Optional
 * }
 * ```
 *
 * An unknown author_id is rejected with 400 and nothing is stored.
 */
pub async fn article_create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ArticleCreate>,
) -> ApiResult<Article> {
    let article = state.articles.create(input).await?;
    tracing::info!("Article {} created", article.article_id);
    Ok(ApiResponse::success(article))
}
