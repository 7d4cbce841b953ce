use async_trait::async_trait;
use models::blog::{self, Blog, NewBlog};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::errors::ServiceError;
use crate::storage::memory::MemoryCollection;

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Blog>, ServiceError>;
    async fn create(&self, new: NewBlog) -> Result<Blog, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Option<Blog>, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError>;
}

/// MongoDB-backed repository implementation.
pub struct MongoBlogRepository {
    pub db: Database,
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>, ServiceError> {
        Ok(blog::find_all(&self.db).await?)
    }

    async fn create(&self, new: NewBlog) -> Result<Blog, ServiceError> {
        Ok(blog::create(&self.db, new).await?)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Blog>, ServiceError> {
        Ok(blog::find_by_id(&self.db, id).await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        Ok(blog::delete_by_id(&self.db, id).await?)
    }
}

/// In-process repository; ids are minted like the driver does.
#[derive(Clone, Default)]
pub struct MemoryBlogRepository {
    blogs: MemoryCollection<Blog>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn list(&self) -> Result<Vec<Blog>, ServiceError> {
        Ok(self.blogs.list().await)
    }

    async fn create(&self, new: NewBlog) -> Result<Blog, ServiceError> {
        blog::validate_content(&new.content)?;
        let created = new.into_blog(ObjectId::new());
        self.blogs.insert(created.clone()).await;
        Ok(created)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Blog>, ServiceError> {
        Ok(self.blogs.get(id).await)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        Ok(self.blogs.remove(id).await)
    }
}
