#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::blog::{Blog, NewBlog};
use models::user::{NewUser, User, UserPatch};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use service::blog::BlogRepository;
use service::errors::ServiceError;
use service::user::UserRepository;
use service::Store;
use tower::ServiceExt;

/// Router over fresh in-memory collections.
pub fn app() -> Router {
    server::startup::build_app(&Store::memory())
}

/// Router whose every persistence call fails like an unreachable deployment.
pub fn app_with_broken_store() -> Router {
    server::startup::build_app(&Store::with_repositories(Arc::new(DownBlogs), Arc::new(DownUsers)))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

fn down() -> ServiceError {
    ServiceError::Db("Server selection timeout: No available servers".into())
}

pub struct DownBlogs;

#[async_trait]
impl BlogRepository for DownBlogs {
    async fn list(&self) -> Result<Vec<Blog>, ServiceError> { Err(down()) }
    async fn create(&self, _new: NewBlog) -> Result<Blog, ServiceError> { Err(down()) }
    async fn get(&self, _id: ObjectId) -> Result<Option<Blog>, ServiceError> { Err(down()) }
    async fn delete(&self, _id: ObjectId) -> Result<bool, ServiceError> { Err(down()) }
}

pub struct DownUsers;

#[async_trait]
impl UserRepository for DownUsers {
    async fn list(&self) -> Result<Vec<User>, ServiceError> { Err(down()) }
    async fn create(&self, _new: NewUser) -> Result<User, ServiceError> { Err(down()) }
    async fn get(&self, _id: ObjectId) -> Result<Option<User>, ServiceError> { Err(down()) }
    async fn update(&self, _id: ObjectId, _patch: UserPatch) -> Result<Option<User>, ServiceError> { Err(down()) }
    async fn delete(&self, _id: ObjectId) -> Result<bool, ServiceError> { Err(down()) }
}
