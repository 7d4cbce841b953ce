use std::sync::Arc;

use configs::{Backend, DatabaseConfig};
use mongodb::Client;
use tracing::info;

use crate::blog::{BlogRepository, BlogService, MemoryBlogRepository, MongoBlogRepository};
use crate::user::{MemoryUserRepository, MongoUserRepository, UserRepository, UserService};

/// Persistence handle built once at startup and handed to the router.
///
/// Owns the driver client (when there is one) so the connection pool can be
/// released with [`Store::shutdown`] after the server stops.
pub struct Store {
    pub blogs: BlogService,
    pub users: UserService,
    client: Option<Client>,
}

impl Store {
    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        match cfg.backend {
            Backend::Memory => {
                info!(service = "server", event = "db_memory", "using in-memory collections");
                Ok(Self::memory())
            }
            Backend::Mongodb => {
                let (client, db) = models::db::connect(cfg).await?;
                let mut store = Self::with_repositories(
                    Arc::new(MongoBlogRepository { db: db.clone() }),
                    Arc::new(MongoUserRepository { db }),
                );
                store.client = Some(client);
                Ok(store)
            }
        }
    }

    pub fn memory() -> Self {
        Self::with_repositories(
            Arc::new(MemoryBlogRepository::new()),
            Arc::new(MemoryUserRepository::new()),
        )
    }

    pub fn with_repositories(blogs: Arc<dyn BlogRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            blogs: BlogService::new(blogs),
            users: UserService::new(users),
            client: None,
        }
    }

    /// Close driver connections; a no-op for the in-memory backend.
    pub async fn shutdown(self) {
        if let Some(client) = self.client {
            client.shutdown().await;
            info!(service = "server", event = "db_closed", "MongoDB client shut down");
        }
    }
}
