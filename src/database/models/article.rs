use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub published_date: Option<DateTime<Utc>>,
}

/// Values for a row about to be inserted into `article`
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub published_date: Option<DateTime<Utc>>,
}

/// Partial update for an `article` row; `None` keeps the stored value.
/// `published_date: Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub published_date: Option<Option<DateTime<Utc>>>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author_id.is_none()
            && self.published_date.is_none()
    }
}
