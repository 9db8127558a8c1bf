//! Inbound request bodies and the rules they are checked against before
//! any store access. Outbound representations are the stored records in
//! `database::models`.

pub mod article;
pub mod author;

pub use article::{ArticleCreate, ArticleUpdate};
pub use author::{AuthorCreate, AuthorUpdate};
