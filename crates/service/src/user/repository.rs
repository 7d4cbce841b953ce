use async_trait::async_trait;
use models::user::{self, NewUser, User, UserPatch};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::errors::ServiceError;
use crate::storage::memory::MemoryCollection;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn create(&self, new: NewUser) -> Result<User, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Option<User>, ServiceError>;
    /// `Ok(None)` when no user has `id`.
    async fn update(&self, id: ObjectId, patch: UserPatch) -> Result<Option<User>, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError>;
}

/// MongoDB-backed repository implementation.
pub struct MongoUserRepository {
    pub db: Database,
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(user::find_all(&self.db).await?)
    }

    async fn create(&self, new: NewUser) -> Result<User, ServiceError> {
        Ok(user::create(&self.db, new).await?)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<User>, ServiceError> {
        Ok(user::find_by_id(&self.db, id).await?)
    }

    async fn update(&self, id: ObjectId, patch: UserPatch) -> Result<Option<User>, ServiceError> {
        Ok(user::update_by_id(&self.db, id, &patch).await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        Ok(user::delete_by_id(&self.db, id).await?)
    }
}

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: MemoryCollection<User>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.list().await)
    }

    async fn create(&self, new: NewUser) -> Result<User, ServiceError> {
        let created = new.into_user(ObjectId::new());
        self.users.insert(created.clone()).await;
        Ok(created)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<User>, ServiceError> {
        Ok(self.users.get(id).await)
    }

    async fn update(&self, id: ObjectId, patch: UserPatch) -> Result<Option<User>, ServiceError> {
        Ok(self.users.update(id, |u| patch.apply(u)).await)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        Ok(self.users.remove(id).await)
    }
}
