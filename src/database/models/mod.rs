pub mod article;
pub mod author;

pub use article::{Article, ArticlePatch, NewArticle};
pub use author::{Author, AuthorPatch, NewAuthor, DEFAULT_AFFILIATION};
