mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_is_public() -> Result<()> {
    let server = common::spawn_server().await?;

    // No API key on purpose
    let res = reqwest::get(server.url("/health")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let data = common::data(res).await?;
    assert_eq!(data["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let data = common::data(res).await?;
    assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
    assert!(data["endpoints"]["authors"].is_string());
    Ok(())
}
