use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Affiliation stored when a new author does not name one.
pub const DEFAULT_AFFILIATION: &str = "Sin afiliación";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub author_id: i64,
    pub name: String,
    pub affiliation: String,
}

/// Values for a row about to be inserted into `author`
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub affiliation: String,
}

/// Partial update for an `author` row; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub affiliation: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.affiliation.is_none()
    }
}
