use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::database::models::{ArticlePatch, NewArticle};

/// Body of `POST /articles`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ArticleCreate {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    pub content: String,

    #[validate(range(min = 1, message = "author_id must be a positive integer"))]
    pub author_id: i64,

    pub published_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /articles/:article_id`; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArticleUpdate {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    #[validate(range(min = 1, message = "author_id must be a positive integer"))]
    pub author_id: Option<i64>,

    /// Outer `None` when absent, `Some(None)` for an explicit `null`
    #[serde(default, deserialize_with = "present")]
    pub published_date: Option<Option<DateTime<Utc>>>,
}

// Only called for keys that appear in the body, so `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<ArticleCreate> for NewArticle {
    fn from(input: ArticleCreate) -> Self {
        Self {
            title: input.title,
            content: input.content,
            author_id: input.author_id,
            published_date: input.published_date,
        }
    }
}

impl From<ArticleUpdate> for ArticlePatch {
    fn from(input: ArticleUpdate) -> Self {
        Self {
            title: input.title,
            content: input.content,
            author_id: input.author_id,
            published_date: input.published_date,
        }
    }
}
