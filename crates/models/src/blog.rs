use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const COLLECTION: &str = "blogs";

/// A stored blog post. `_id` is rendered as a hex string in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
}

/// Blog fields before the store assigns an `_id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
}

impl NewBlog {
    pub fn into_blog(self, id: ObjectId) -> Blog {
        Blog {
            id,
            title: self.title,
            image: self.image,
            description: self.description,
            content: self.content,
        }
    }
}

pub fn validate_content(content: &str) -> Result<(), ModelError> {
    if content.is_empty() {
        return Err(ModelError::Validation("content is required".into()));
    }
    Ok(())
}

fn collection(db: &Database) -> Collection<Blog> {
    db.collection(COLLECTION)
}

pub async fn find_all(db: &Database) -> Result<Vec<Blog>, ModelError> {
    let cursor = collection(db).find(doc! {}).await?;
    Ok(cursor.try_collect::<Vec<Blog>>().await?)
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<Blog>, ModelError> {
    Ok(collection(db).find_one(doc! { "_id": id }).await?)
}

pub async fn create(db: &Database, new: NewBlog) -> Result<Blog, ModelError> {
    validate_content(&new.content)?;
    let inserted = db
        .collection::<NewBlog>(COLLECTION)
        .insert_one(&new)
        .await?
        .inserted_id;
    let id = inserted
        .as_object_id()
        .ok_or_else(|| ModelError::Db(format!("unexpected _id type for blog: {inserted}")))?;
    Ok(new.into_blog(id))
}

/// Returns whether a document was removed.
pub async fn delete_by_id(db: &Database, id: ObjectId) -> Result<bool, ModelError> {
    let res = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(res.deleted_count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn json_uses_hex_id_and_omits_absent_fields() {
        let id = ObjectId::new();
        let blog = NewBlog { title: Some("T".into()), content: "C".into(), ..Default::default() }
            .into_blog(id);
        let v = serde_json::to_value(&blog).unwrap();
        assert_eq!(v, serde_json::json!({"_id": id.to_hex(), "title": "T", "content": "C"}));
    }

    #[test]
    fn reads_stored_document() {
        let id = ObjectId::new();
        let stored = bson::doc! { "_id": id, "content": "body", "image": "a.png", "__v": 0 };
        let blog: Blog = bson::from_document(stored).unwrap();
        assert_eq!(blog.id, id);
        assert_eq!(blog.image.as_deref(), Some("a.png"));
        assert!(blog.title.is_none());
    }

    #[test]
    fn new_blog_document_has_no_nulls() {
        let new = NewBlog { content: "C".into(), ..Default::default() };
        let d = bson::to_document(&new).unwrap();
        assert_eq!(d, bson::doc! { "content": "C" });
    }

    #[test]
    fn empty_content_is_invalid() {
        assert!(matches!(validate_content(""), Err(ModelError::Validation(_))));
        assert!(validate_content("x").is_ok());
    }
}
