use serde::Deserialize;
use validator::Validate;

use crate::database::models::{AuthorPatch, NewAuthor, DEFAULT_AFFILIATION};

/// Body of `POST /authors`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthorCreate {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(max = 50, message = "Affiliation must be at most 50 characters"))]
    pub affiliation: Option<String>,
}

/// Body of `PUT /authors/:author_id`; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorUpdate {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "Affiliation must be at most 50 characters"))]
    pub affiliation: Option<String>,
}

impl From<AuthorCreate> for NewAuthor {
    fn from(input: AuthorCreate) -> Self {
        Self {
            name: input.name,
            affiliation: input
                .affiliation
                .unwrap_or_else(|| DEFAULT_AFFILIATION.to_string()),
        }
    }
}

impl From<AuthorUpdate> for AuthorPatch {
    fn from(input: AuthorUpdate) -> Self {
        Self {
            name: input.name,
            affiliation: input.affiliation,
        }
    }
}
