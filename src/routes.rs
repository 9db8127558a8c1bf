use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{article, author, system};
use crate::middleware::api_key_middleware;
use crate::state::AppState;

/// Build the full router: public system routes plus the gated resources
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let protected = Router::new()
        .merge(author_routes())
        .merge(article_routes())
        .route_layer(middleware::from_fn_with_state(
            state.gate.clone(),
            api_key_middleware,
        ));

    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        // Protected by the API key gate
        .merge(protected)
        // Global middleware, outermost first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
        .with_state(state)
}

fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(author::author_list).post(author::author_create))
        .route(
            "/authors/:author_id",
            get(author::author_show)
                .put(author::author_update)
                .delete(author::author_delete),
        )
}

fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(article::article_list).post(article::article_create))
        .route(
            "/articles/:article_id",
            get(article::article_show)
                .put(article::article_update)
                .delete(article::article_delete),
        )
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
