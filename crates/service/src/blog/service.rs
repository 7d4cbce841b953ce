use std::sync::Arc;

use models::blog::Blog;
use tracing::{info, instrument};

use crate::blog::domain::CreateBlogInput;
use crate::blog::repository::BlogRepository;
use crate::errors::ServiceError;

/// Blog operations as exposed over HTTP. Each call makes at most one
/// repository call after input validation.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Blog>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateBlogInput) -> Result<Blog, ServiceError> {
        let new = input.into_new_blog()?;
        let created = self.repo.create(new).await?;
        info!(id = %created.id, "blog_created");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<Blog, ServiceError> {
        let oid = models::parse_object_id(id)?;
        self.repo
            .get(oid)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog"))
    }

    /// Deleting an id that does not exist is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let oid = models::parse_object_id(id)?;
        let existed = self.repo.delete(oid).await?;
        info!(id = %oid, existed, "blog_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::repository::MemoryBlogRepository;
    use mongodb::bson::oid::ObjectId;

    fn service() -> BlogService {
        BlogService::new(Arc::new(MemoryBlogRepository::new()))
    }

    fn input(title: Option<&str>, content: Option<&str>) -> CreateBlogInput {
        CreateBlogInput {
            title: title.map(Into::into),
            content: content.map(Into::into),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_without_content_persists_nothing() -> Result<(), anyhow::Error> {
        let svc = service();
        let err = svc.create(input(Some("T"), None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn created_blog_is_listed_and_fetchable() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(input(Some("T"), Some("C"))).await?;
        assert_eq!(created.title.as_deref(), Some("T"));
        assert_eq!(created.content, "C");

        let listed = svc.list().await?;
        assert_eq!(listed, vec![created.clone()]);

        let fetched = svc.get(&created.id.to_hex()).await?;
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let err = service().get(&ObjectId::new().to_hex()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(m) if m == "Blog not found"));
    }

    #[tokio::test]
    async fn malformed_id_is_a_validation_error() {
        let svc = service();
        assert!(matches!(svc.get("nope").await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.delete("nope").await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(input(None, Some("C"))).await?;
        let id = created.id.to_hex();
        svc.delete(&id).await?;
        svc.delete(&id).await?;
        assert!(matches!(svc.get(&id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_unique_per_blog() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input(None, Some("a"))).await?;
        let b = svc.create(input(None, Some("b"))).await?;
        assert_ne!(a.id, b.id);
        svc.delete(&a.id.to_hex()).await?;
        assert_eq!(svc.get(&b.id.to_hex()).await?.content, "b");
        Ok(())
    }
}
