use tracing::debug;
use validator::Validate;

use crate::database::models::{Article, ArticlePatch, NewArticle};
use crate::database::{ArticleRepository, DatabaseError, DatabaseManager, Repository};
use crate::schemas::{ArticleCreate, ArticleUpdate};

use super::error::{ServiceError, ServiceResult};

/// Business operations on articles
#[derive(Clone, Debug)]
pub struct ArticleService {
    repository: ArticleRepository,
}

impl ArticleService {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            repository: ArticleRepository::new(db.pool().clone()),
        }
    }

    /// Create an article owned by an existing author
    pub async fn create(&self, input: ArticleCreate) -> ServiceResult<Article> {
        input.validate()?;

        let new = NewArticle::from(input);
        let article = self
            .repository
            .insert(&new)
            .await
            .map_err(|e| Self::store_error("create article", new.author_id, e))?;

        debug!("Created article {} for author {}", article.article_id, article.author_id);
        Ok(article)
    }

    /// `Ok(None)` when no article has this id
    pub async fn get_by_id(&self, article_id: i64) -> ServiceResult<Option<Article>> {
        self.repository
            .select_one(article_id)
            .await
            .map_err(|e| ServiceError::from_store("retrieve article", e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Article>> {
        self.repository
            .select_all()
            .await
            .map_err(|e| ServiceError::from_store("retrieve articles", e))
    }

    /// Apply a partial update; moving the article to an unknown author is a conflict
    pub async fn update(&self, article_id: i64, input: ArticleUpdate) -> ServiceResult<Article> {
        input.validate()?;

        let patch = ArticlePatch::from(input);
        let updated = self.repository.update(article_id, &patch).await.map_err(|e| match patch.author_id {
            Some(author_id) => Self::store_error("update article", author_id, e),
            None => ServiceError::from_store("update article", e),
        })?;

        match updated {
            Some(article) => {
                debug!("Updated article {}", article_id);
                Ok(article)
            }
            None => Err(ServiceError::NotFound(format!("No article found with ID: {}", article_id))),
        }
    }

    /// Returns whether the article existed
    pub async fn delete(&self, article_id: i64) -> ServiceResult<bool> {
        let deleted = self
            .repository
            .delete(article_id)
            .await
            .map_err(|e| ServiceError::from_store("delete article", e))?;

        if deleted {
            debug!("Deleted article {}", article_id);
        }
        Ok(deleted)
    }

    fn store_error(action: &str, author_id: i64, err: DatabaseError) -> ServiceError {
        match err {
            DatabaseError::ForeignKeyViolation(_) => ServiceError::Conflict(format!(
                "Failed to {}: author with ID {} does not exist",
                action, author_id
            )),
            other => ServiceError::from_store(action, other),
        }
    }
}
