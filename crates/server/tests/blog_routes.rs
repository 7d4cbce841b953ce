use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{app, app_with_broken_store, send};

const NEVER_ASSIGNED: &str = "0123456789abcdef01234567";

#[tokio::test]
async fn create_without_content_is_rejected_and_not_stored() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/blogs", Some(json!({"title": "T"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error adding blog");
    assert_eq!(body["error"], "content is required");

    let (status, body) = send(&app, "GET", "/blogs", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn created_blog_gets_an_id_and_is_listed() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/blogs", Some(json!({"title": "T", "content": "C"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog added successfully");
    let id = body["blog"]["_id"].as_str().expect("hex id").to_string();
    assert_eq!(id.len(), 24);
    assert_eq!(body["blog"]["title"], "T");
    assert_eq!(body["blog"]["content"], "C");
    assert!(body["blog"].get("image").is_none());

    let (status, list) = send(&app, "GET", "/blogs", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([body["blog"].clone()]));

    let (status, fetched) = send(&app, "GET", &format!("/blogs/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body["blog"]);
    Ok(())
}

#[tokio::test]
async fn list_keeps_insertion_order() -> anyhow::Result<()> {
    let app = app();
    for c in ["first", "second", "third"] {
        send(&app, "POST", "/blogs", Some(json!({"content": c}))).await?;
    }
    let (_, list) = send(&app, "GET", "/blogs", None).await?;
    let contents: Vec<&str> = list.as_array().unwrap().iter().map(|b| b["content"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    Ok(())
}

#[tokio::test]
async fn unknown_blog_is_404() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", &format!("/blogs/{NEVER_ASSIGNED}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Blog not found"}));
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_400() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "GET", "/blogs/not-an-id", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error fetching blog");

    let (status, _) = send(&app, "DELETE", "/blogs/not-an-id", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_twice_succeeds_both_times() -> anyhow::Result<()> {
    let app = app();
    let (_, created) = send(&app, "POST", "/blogs", Some(json!({"content": "C"}))).await?;
    let uri = format!("/blogs/{}", created["blog"]["_id"].as_str().unwrap());

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", &uri, None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Blog deleted successfully"}));
    }
    let (status, _) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_400_with_message() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/blogs", Some(json!({"content": 42}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "POST", "/blogs", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
    Ok(())
}

#[tokio::test]
async fn backend_failures_are_500_with_detail() -> anyhow::Result<()> {
    let app = app_with_broken_store();
    let (status, body) = send(&app, "GET", "/blogs", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error fetching blogs");

    let (status, body) = send(&app, "GET", &format!("/blogs/{NEVER_ASSIGNED}"), None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error fetching blog");
    assert!(body["error"].as_str().unwrap().contains("Server selection timeout"));

    let (status, body) = send(&app, "POST", "/blogs", Some(json!({"content": "C"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error adding blog");

    let (status, body) = send(&app, "DELETE", &format!("/blogs/{NEVER_ASSIGNED}"), None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error deleting blog");
    Ok(())
}
