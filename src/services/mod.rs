pub mod article_service;
pub mod author_service;
pub mod error;

pub use article_service::ArticleService;
pub use author_service::AuthorService;
pub use error::{ServiceError, ServiceResult};
