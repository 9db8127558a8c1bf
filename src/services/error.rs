use thiserror::Error;
use validator::ValidationErrors;

use crate::database::manager::DatabaseError;

/// Failure kinds surfaced by the author and article services.
///
/// Store errors never leave the service layer raw; they are folded into one
/// of these variants with a message fit for a client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Classify a store failure raised while `action` was in progress
    pub(crate) fn from_store(action: &str, err: DatabaseError) -> Self {
        match err {
            DatabaseError::ForeignKeyViolation(msg) | DatabaseError::UniqueViolation(msg) => {
                ServiceError::Conflict(format!("Failed to {}: {}", action, msg))
            }
            DatabaseError::ConstraintViolation(msg) => {
                ServiceError::Validation(format!("Failed to {}: {}", action, msg))
            }
            other => {
                tracing::error!("Store error while trying to {}: {}", action, other);
                ServiceError::Unexpected(format!("Error trying to {}: {}", action, other))
            }
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "invalid value".to_string());
                format!("{}: {}", field, message)
            })
            .collect();
        fields.sort();
        ServiceError::Validation(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_violations_become_conflicts() {
        let err = ServiceError::from_store(
            "create article",
            DatabaseError::ForeignKeyViolation("FOREIGN KEY constraint failed".into()),
        );
        assert!(matches!(err, ServiceError::Conflict(ref m) if m.starts_with("Failed to create article")));
    }

    #[test]
    fn constraint_violations_become_validation_errors() {
        let err = ServiceError::from_store(
            "create author",
            DatabaseError::ConstraintViolation("CHECK constraint failed".into()),
        );
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn other_store_errors_are_unexpected() {
        let err = ServiceError::from_store("list authors", DatabaseError::Sqlx(sqlx::Error::PoolClosed));
        assert!(matches!(err, ServiceError::Unexpected(_)));
    }
}
