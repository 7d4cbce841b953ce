use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models::blog::Blog;
use serde::Serialize;
use service::blog::CreateBlogInput;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BlogOutput {
    pub message: &'static str,
    pub blog: Blog,
}

#[derive(Debug, Serialize)]
pub struct MessageOutput {
    pub message: &'static str,
}

#[utoipa::path(
    get, path = "/blogs", tag = "blogs",
    responses(
        (status = 200, description = "All blogs", body = [crate::openapi::BlogDoc]),
        (status = 500, description = "Error fetching blogs", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, JsonApiError> {
    state
        .blogs
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching blogs"))
}

#[utoipa::path(
    post, path = "/blogs", tag = "blogs",
    request_body = crate::openapi::CreateBlogDoc,
    responses(
        (status = 200, description = "Blog added successfully", body = crate::openapi::BlogCreatedDoc),
        (status = 400, description = "Missing content or malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error adding blog", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlogInput>, JsonRejection>,
) -> Result<Json<BlogOutput>, JsonApiError> {
    let Json(input) = payload?;
    let blog = state
        .blogs
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error adding blog"))?;
    Ok(Json(BlogOutput { message: "Blog added successfully", blog }))
}

#[utoipa::path(
    get, path = "/blogs/{id}", tag = "blogs",
    params(("id" = String, Path, description = "Blog ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "The blog", body = crate::openapi::BlogDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Blog not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error fetching blog", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Blog>, JsonApiError> {
    state
        .blogs
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching blog"))
}

#[utoipa::path(
    delete, path = "/blogs/{id}", tag = "blogs",
    params(("id" = String, Path, description = "Blog ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Blog deleted successfully, whether or not it existed", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error deleting blog", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageOutput>, JsonApiError> {
    state
        .blogs
        .delete(&id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error deleting blog"))?;
    Ok(Json(MessageOutput { message: "Blog deleted successfully" }))
}
