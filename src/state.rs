use crate::database::DatabaseManager;
use crate::middleware::ApiKeyGate;
use crate::services::{ArticleService, AuthorService};

/// Everything a request handler needs, injected through axum `State`
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseManager,
    pub authors: AuthorService,
    pub articles: ArticleService,
    pub gate: ApiKeyGate,
}

impl AppState {
    pub fn new(db: DatabaseManager, gate: ApiKeyGate) -> Self {
        Self {
            authors: AuthorService::new(&db),
            articles: ArticleService::new(&db),
            db,
            gate,
        }
    }
}
