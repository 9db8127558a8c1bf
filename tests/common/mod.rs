#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use authorship_api::config::AppConfig;
use authorship_api::database::DatabaseManager;
use authorship_api::middleware::ApiKeyGate;
use authorship_api::{app, AppState};

pub const API_KEY: &str = "test-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Client that sends the API key on every request
    pub fn client(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static(API_KEY));
        Ok(reqwest::Client::builder().default_headers(headers).build()?)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Boot the real router on a free port, backed by a fresh in-memory store.
/// The server lives as long as the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    let mut config = AppConfig::from_env();
    config.security.api_key = Some(API_KEY.to_string());
    config.security.api_key_header = "x-api-key".to_string();

    let db = DatabaseManager::in_memory().await?;
    let gate = ApiKeyGate::from_config(&config.security)?;
    let router = app(AppState::new(db, gate), &config);

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
    })
}

/// Unwrap the success envelope and return its `data`
pub async fn data(res: reqwest::Response) -> Result<Value> {
    let body = res.json::<Value>().await?;
    anyhow::ensure!(
        body.get("success").and_then(Value::as_bool) == Some(true),
        "success flag false or missing: {}",
        body
    );
    body.get("data").cloned().context("missing data field")
}

pub async fn create_author(server: &TestServer, name: &str, affiliation: &str) -> Result<i64> {
    let res = server
        .client()?
        .post(server.url("/authors"))
        .json(&serde_json::json!({ "name": name, "affiliation": affiliation }))
        .send()
        .await?;
    anyhow::ensure!(res.status().is_success(), "create author failed: {}", res.status());
    data(res).await?["author_id"].as_i64().context("author_id missing")
}
