use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Article, ArticlePatch, Author, AuthorPatch, NewArticle, NewAuthor};

/// Store operations for one relation, keyed by its integer surrogate key.
///
/// `select_one`, `update` and `delete` report a missing row through their
/// return value; errors are reserved for engine failures and constraint
/// violations.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send;
    type New: Sync;
    type Patch: Sync;

    async fn insert(&self, new: &Self::New) -> Result<Self::Record, DatabaseError>;

    async fn select_one(&self, id: i64) -> Result<Option<Self::Record>, DatabaseError>;

    /// Every row, ascending by primary key
    async fn select_all(&self) -> Result<Vec<Self::Record>, DatabaseError>;

    /// Apply only the fields present in `patch`
    async fn update(&self, id: i64, patch: &Self::Patch) -> Result<Option<Self::Record>, DatabaseError>;

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError>;
}

#[derive(Clone, Debug)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for AuthorRepository {
    type Record = Author;
    type New = NewAuthor;
    type Patch = AuthorPatch;

    async fn insert(&self, new: &NewAuthor) -> Result<Author, DatabaseError> {
        let author = sqlx::query_as::<_, Author>(
            "INSERT INTO author (name, affiliation) VALUES (?, ?) \
             RETURNING author_id, name, affiliation",
        )
        .bind(&new.name)
        .bind(&new.affiliation)
        .fetch_one(&self.pool)
        .await?;
        Ok(author)
    }

    async fn select_one(&self, id: i64) -> Result<Option<Author>, DatabaseError> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT author_id, name, affiliation FROM author WHERE author_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn select_all(&self) -> Result<Vec<Author>, DatabaseError> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT author_id, name, affiliation FROM author ORDER BY author_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    async fn update(&self, id: i64, patch: &AuthorPatch) -> Result<Option<Author>, DatabaseError> {
        if patch.is_empty() {
            return self.select_one(id).await;
        }

        let author = sqlx::query_as::<_, Author>(
            "UPDATE author SET \
                name = COALESCE(?, name), \
                affiliation = COALESCE(?, affiliation) \
             WHERE author_id = ? \
             RETURNING author_id, name, affiliation",
        )
        .bind(patch.name.as_deref())
        .bind(patch.affiliation.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        // Dependent articles go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM author WHERE author_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone, Debug)]
pub struct ArticleRepository {
    pool: SqlitePool,
}

impl ArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for ArticleRepository {
    type Record = Article;
    type New = NewArticle;
    type Patch = ArticlePatch;

    async fn insert(&self, new: &NewArticle) -> Result<Article, DatabaseError> {
        let article = sqlx::query_as::<_, Article>(
            "INSERT INTO article (title, content, author_id, published_date) VALUES (?, ?, ?, ?) \
             RETURNING article_id, title, content, author_id, published_date",
        )
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.author_id)
        .bind(new.published_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(article)
    }

    async fn select_one(&self, id: i64) -> Result<Option<Article>, DatabaseError> {
        let article = sqlx::query_as::<_, Article>(
            "SELECT article_id, title, content, author_id, published_date \
             FROM article WHERE article_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(article)
    }

    async fn select_all(&self) -> Result<Vec<Article>, DatabaseError> {
        let articles = sqlx::query_as::<_, Article>(
            "SELECT article_id, title, content, author_id, published_date \
             FROM article ORDER BY article_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(articles)
    }

    async fn update(&self, id: i64, patch: &ArticlePatch) -> Result<Option<Article>, DatabaseError> {
        if patch.is_empty() {
            return self.select_one(id).await;
        }

        let article = sqlx::query_as::<_, Article>(
            "UPDATE article SET \
                title = COALESCE(?, title), \
                content = COALESCE(?, content), \
                author_id = COALESCE(?, author_id), \
                published_date = CASE WHEN ? THEN ? ELSE published_date END \
             WHERE article_id = ? \
             RETURNING article_id, title, content, author_id, published_date",
        )
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.author_id)
        .bind(patch.published_date.is_some())
        .bind(patch.published_date.flatten())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(article)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM article WHERE article_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
