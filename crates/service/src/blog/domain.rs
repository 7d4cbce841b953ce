use models::blog::{self, NewBlog};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Body of `POST /blogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateBlogInput {
    /// Reject a missing or empty `content` before anything reaches the store.
    pub fn into_new_blog(self) -> Result<NewBlog, ServiceError> {
        let content = self.content.unwrap_or_default();
        blog::validate_content(&content)?;
        Ok(NewBlog {
            title: self.title,
            image: self.image,
            description: self.description,
            content,
        })
    }
}
