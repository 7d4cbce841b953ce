use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models::user::User;
use serde::Serialize;
use service::user::{CreateUserInput, UpdateUserInput};

use crate::errors::JsonApiError;
use crate::routes::blogs::MessageOutput;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserOutput {
    pub message: &'static str,
    pub user: User,
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Error fetching users", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, JsonApiError> {
    state
        .users
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching users"))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "User added successfully", body = crate::openapi::UserSavedDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error adding user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserInput>, JsonRejection>,
) -> Result<Json<UserOutput>, JsonApiError> {
    let Json(input) = payload?;
    let user = state
        .users
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error adding user"))?;
    Ok(Json(UserOutput { message: "User added successfully", user }))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "The user", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error fetching user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<User>, JsonApiError> {
    state
        .users
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching user"))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User ObjectId (24 hex chars)")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "User updated successfully", body = crate::openapi::UserSavedDoc),
        (status = 400, description = "Malformed id or body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error updating user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserInput>, JsonRejection>,
) -> Result<Json<UserOutput>, JsonApiError> {
    let Json(input) = payload?;
    let user = state
        .users
        .update(&id, input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error updating user"))?;
    Ok(Json(UserOutput { message: "User updated successfully", user }))
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "User deleted successfully, whether or not it existed", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Error deleting user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageOutput>, JsonApiError> {
    state
        .users
        .delete(&id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error deleting user"))?;
    Ok(Json(MessageOutput { message: "User deleted successfully" }))
}
