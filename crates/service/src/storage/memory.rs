use std::sync::Arc;

use models::blog::Blog;
use models::user::User;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// Anything stored in a [`MemoryCollection`] exposes its identifier.
pub trait Keyed {
    fn key(&self) -> ObjectId;
}

impl Keyed for Blog {
    fn key(&self) -> ObjectId { self.id }
}

impl Keyed for User {
    fn key(&self) -> ObjectId { self.id }
}

/// In-process document collection preserving insertion order.
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct MemoryCollection<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T: Keyed + Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: ObjectId) -> Option<T> {
        let docs = self.inner.read().await;
        docs.iter().find(|d| d.key() == id).cloned()
    }

    pub async fn insert(&self, doc: T) {
        self.inner.write().await.push(doc);
    }

    /// Remove by id; returns whether it existed.
    pub async fn remove(&self, id: ObjectId) -> bool {
        let mut docs = self.inner.write().await;
        let before = docs.len();
        docs.retain(|d| d.key() != id);
        docs.len() != before
    }

    /// Mutate the document in place and return the post-update copy.
    pub async fn update<F>(&self, id: ObjectId, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut docs = self.inner.write().await;
        let doc = docs.iter_mut().find(|d| d.key() == id)?;
        f(doc);
        Some(doc.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
