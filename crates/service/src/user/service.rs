use std::sync::Arc;

use models::user::User;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::user::domain::{CreateUserInput, UpdateUserInput};
use crate::user::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateUserInput) -> Result<User, ServiceError> {
        let created = self.repo.create(input.into()).await?;
        info!(id = %created.id, "user_created");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<User, ServiceError> {
        let oid = models::parse_object_id(id)?;
        self.repo
            .get(oid)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Overwrite the supplied fields; an unknown id is `NotFound`.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateUserInput) -> Result<User, ServiceError> {
        let oid = models::parse_object_id(id)?;
        let updated = self
            .repo
            .update(oid, input.into())
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        info!(id = %oid, "user_updated");
        Ok(updated)
    }

    /// Deleting an id that does not exist is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let oid = models::parse_object_id(id)?;
        let existed = self.repo.delete(oid).await?;
        info!(id = %oid, existed, "user_deleted");
        Ok(())
    }
}
