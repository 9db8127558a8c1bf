use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::middleware::ApiKeyGate;
use crate::routes::app;
use crate::state::AppState;

/// Open the store, serve until a shutdown signal arrives, then close the store
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting Authorship API in {:?} mode", config.environment);

    let gate = ApiKeyGate::from_config(&config.security)
        .with_context(|| format!("invalid API key header name {:?}", config.security.api_key_header))?;
    if gate.is_open() {
        if config.requires_api_key() {
            anyhow::bail!("API_KEY must be set outside development");
        }
        warn!("API_KEY is not set; author and article routes are unauthenticated");
    }

    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;

    let router = app(AppState::new(db.clone(), gate), &config);

    let bind_addr = format!("{}:{}", config.api.bind, config.api.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Authorship API listening on http://{}", bind_addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Release the store whether or not the server exited cleanly
    db.close().await;
    served.context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
