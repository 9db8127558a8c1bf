mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_article_for_existing_author() -> Result<()> {
    let server = common::spawn_server().await?;
    let author_id = common::create_author(&server, "Grace", "Navy").await?;

    let res = server
        .client()?
        .post(server.url("/articles"))
        .json(&json!({
            "title": "Compilers",
            "content": "A long text",
            "author_id": author_id,
            "published_date": "2024-01-15T09:00:00Z"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let article = common::data(res).await?;
    assert_eq!(article["article_id"], 1);
    assert_eq!(article["author_id"], author_id);
    assert_eq!(article["published_date"], "2024-01-15T09:00:00Z");
    Ok(())
}

#[tokio::test]
async fn unknown_author_id_is_rejected_and_stores_nothing() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = server.client()?;

    let res = client
        .post(server.url("/articles"))
        .json(&json!({ "title": "T", "content": "C", "author_id": 5 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("does not exist"), "{body}");

    let res = client.get(server.url("/articles")).send().await?;
    assert_eq!(common::data(res).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn missing_required_fields_are_unprocessable() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client()?
        .post(server.url("/articles"))
        .json(&json!({ "title": "T", "author_id": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    assert_eq!(body["field_errors"]["content"], "This field is required");
    Ok(())
}

#[tokio::test]
async fn update_changes_only_given_fields() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = server.client()?;
    let author_id = common::create_author(&server, "Grace", "Navy").await?;

    let res = client
        .post(server.url("/articles"))
        .json(&json!({ "title": "T", "content": "C", "author_id": author_id }))
        .send()
        .await?;
    let id = common::data(res).await?["article_id"].as_i64().unwrap();

    let res = client
        .put(server.url(&format!("/articles/{id}")))
        .json(&json!({ "title": "T2" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = common::data(res).await?;
    assert_eq!(updated["title"], "T2");
    assert_eq!(updated["content"], "C");
    assert_eq!(updated["author_id"], author_id);
    assert_eq!(updated["published_date"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn explicit_null_clears_published_date() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = server.client()?;
    let author_id = common::create_author(&server, "Grace", "Navy").await?;

    let res = client
        .post(server.url("/articles"))
        .json(&json!({
            "title": "T",
            "content": "C",
            "author_id": author_id,
            "published_date": "2024-01-15T09:00:00Z"
        }))
        .send()
        .await?;
    let id = common::data(res).await?["article_id"].as_i64().unwrap();

    let res = client
        .put(server.url(&format!("/articles/{id}")))
        .json(&json!({ "title": "T2" }))
        .send()
        .await?;
    assert_eq!(common::data(res).await?["published_date"], "2024-01-15T09:00:00Z");

    let res = client
        .put(server.url(&format!("/articles/{id}")))
        .json(&json!({ "published_date": null }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = common::data(res).await?;
    assert_eq!(updated["published_date"], Value::Null);
    assert_eq!(updated["title"], "T2");
    Ok(())
}

#[tokio::test]
async fn update_to_unknown_author_is_bad_request() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = server.client()?;
    let author_id = common::create_author(&server, "Grace", "Navy").await?;

    let res = client
        .post(server.url("/articles"))
        .json(&json!({ "title": "T", "content": "C", "author_id": author_id }))
        .send()
        .await?;
    let id = common::data(res).await?["article_id"].as_i64().unwrap();

    let res = client
        .put(server.url(&format!("/articles/{id}")))
        .json(&json!({ "author_id": 1000 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(server.url(&format!("/articles/{id}"))).send().await?;
    assert_eq!(common::data(res).await?["author_id"], author_id);
    Ok(())
}

#[tokio::test]
async fn unknown_article_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = server.client()?;

    let res = client.get(server.url("/articles/3")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(server.url("/articles/3"))
        .json(&json!({ "content": "x" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(server.url("/articles/3")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
