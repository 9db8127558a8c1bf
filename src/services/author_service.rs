use tracing::debug;
use validator::Validate;

use crate::database::models::{Author, AuthorPatch, NewAuthor};
use crate::database::{AuthorRepository, DatabaseManager, Repository};
use crate::schemas::{AuthorCreate, AuthorUpdate};

use super::error::{ServiceError, ServiceResult};

/// Business operations on authors
#[derive(Clone, Debug)]
pub struct AuthorService {
    repository: AuthorRepository,
}

impl AuthorService {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            repository: AuthorRepository::new(db.pool().clone()),
        }
    }

    /// Create an author; a missing affiliation falls back to the placeholder
    pub async fn create(&self, input: AuthorCreate) -> ServiceResult<Author> {
        input.validate()?;
        if input.name.trim().is_empty() {
            return Err(ServiceError::Validation("Author name must not be empty".to_string()));
        }

        let new = NewAuthor::from(input);
        let author = self
            .repository
            .insert(&new)
            .await
            .map_err(|e| ServiceError::from_store("create author", e))?;

        debug!("Created author {}", author.author_id);
        Ok(author)
    }

    /// `Ok(None)` when no author has this id
    pub async fn get_by_id(&self, author_id: i64) -> ServiceResult<Option<Author>> {
        self.repository
            .select_one(author_id)
            .await
            .map_err(|e| ServiceError::from_store("retrieve author", e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Author>> {
        self.repository
            .select_all()
            .await
            .map_err(|e| ServiceError::from_store("retrieve authors", e))
    }

    pub async fn update(&self, author_id: i64, input: AuthorUpdate) -> ServiceResult<Author> {
        input.validate()?;
        if input.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ServiceError::Validation("Author name must not be empty".to_string()));
        }

        let patch = AuthorPatch::from(input);
        let updated = self
            .repository
            .update(author_id, &patch)
            .await
            .map_err(|e| ServiceError::from_store("update author", e))?;

        match updated {
            Some(author) => {
                debug!("Updated author {}", author_id);
                Ok(author)
            }
            None => Err(ServiceError::NotFound(format!("No author found with ID: {}", author_id))),
        }
    }

    /// Remove an author and, through the store, every article it owns.
    /// Returns whether the author existed.
    pub async fn delete(&self, author_id: i64) -> ServiceResult<bool> {
        let deleted = self
            .repository
            .delete(author_id)
            .await
            .map_err(|e| ServiceError::from_store("delete author", e))?;

        if deleted {
            debug!("Deleted author {} and its articles", author_id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> AuthorService {
        let db = DatabaseManager::in_memory().await.unwrap();
        AuthorService::new(&db)
    }

    fn create(name: &str, affiliation: Option<&str>) -> AuthorCreate {
        AuthorCreate {
            name: name.to_string(),
            affiliation: affiliation.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let authors = service().await;
        let created = authors.create(create("Ada", Some("X"))).await.unwrap();

        let fetched = authors.get_by_id(created.author_id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.affiliation, "X");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_uses_placeholder_affiliation() {
        let authors = service().await;
        let created = authors.create(create("Grace", None)).await.unwrap();
        assert_eq!(created.affiliation, crate::database::models::DEFAULT_AFFILIATION);
    }

    #[tokio::test]
    async fn empty_name_is_a_validation_error() {
        let authors = service().await;
        for name in ["", "   "] {
            let err = authors.create(create(name, None)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "{name:?} gave {err:?}");
        }
        assert!(authors.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_unused_id_is_none() {
        let authors = service().await;
        assert!(authors.get_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let authors = service().await;
        for name in ["A", "B", "C"] {
            authors.create(create(name, None)).await.unwrap();
        }
        let names: Vec<_> = authors.get_all().await.unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn empty_update_changes_nothing() {
        let authors = service().await;
        let created = authors.create(create("Ada", Some("X"))).await.unwrap();
        let updated = authors.update(created.author_id, AuthorUpdate::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn partial_update_keeps_absent_fields() {
        let authors = service().await;
        let created = authors.create(create("Ada", Some("X"))).await.unwrap();
        let updated = authors
            .update(
                created.author_id,
                AuthorUpdate {
                    affiliation: Some("Y".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.affiliation, "Y");
    }

    #[tokio::test]
    async fn update_of_missing_author_is_not_found() {
        let authors = service().await;
        let err = authors.update(9, AuthorUpdate::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let authors = service().await;
        let created = authors.create(create("Ada", None)).await.unwrap();
        assert!(authors.delete(created.author_id).await.unwrap());
        assert!(!authors.delete(created.author_id).await.unwrap());
        assert!(authors.get_by_id(created.author_id).await.unwrap().is_none());
    }
}
