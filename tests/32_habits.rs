mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn habit_lifecycle() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("alice").await?;

    let created = server
        .post("/habits", &token, json!({ "title": "run", "description": "5k" }))
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);
    let habit: Value = created.json().await?;
    assert_eq!(habit["is_active"], true);

    let id = habit["id"].as_i64().unwrap_or_default();
    let updated: Value = server
        .put(&format!("/habits/{}", id), &token, json!({ "title": "run", "is_active": false }))
        .await?
        .json()
        .await?;
    assert_eq!(updated["is_active"], false);
    assert!(updated["description"].is_null());

    let habits: Vec<Value> = server.get("/habits", &token).await?.json().await?;
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["is_active"], false);

    let deleted = server.delete(&format!("/habits/{}", id), &token).await?;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let habits: Vec<Value> = server.get("/habits", &token).await?.json().await?;
    assert!(habits.is_empty());
    Ok(())
}

#[tokio::test]
async fn habit_requires_title() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token_for("alice").await?;

    let res = server.post("/habits", &token, json!({ "title": "" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
