use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::ModelError;

pub const COLLECTION: &str = "users";

/// A stored user. `isAdmin` is informational only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_number")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// User fields before the store assigns an `_id`. `age` is written as a double,
/// the same type `$set` writes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            number: self.number,
            plan: self.plan,
            is_admin: self.is_admin,
        }
    }
}

/// Partial update. The outer `Option` says whether the field was named;
/// `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<Option<String>>,
    pub age: Option<Option<f64>>,
    pub email: Option<Option<String>>,
    pub number: Option<Option<String>>,
    pub plan: Option<Option<String>>,
    pub is_admin: Option<Option<bool>>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == UserPatch::default()
    }

    /// `$set` for supplied values and `$unset` for cleared ones; empty operators are omitted.
    pub fn to_update_document(&self) -> Document {
        let mut set = Document::new();
        let mut unset = Document::new();
        let mut put = |key: &str, value: Option<Bson>| match value {
            Some(v) => { set.insert(key, v); }
            None => { unset.insert(key, ""); }
        };
        if let Some(v) = &self.name { put("name", v.as_deref().map(Bson::from)); }
        if let Some(v) = self.age { put("age", v.map(Bson::Double)); }
        if let Some(v) = &self.email { put("email", v.as_deref().map(Bson::from)); }
        if let Some(v) = &self.number { put("number", v.as_deref().map(Bson::from)); }
        if let Some(v) = &self.plan { put("plan", v.as_deref().map(Bson::from)); }
        if let Some(v) = self.is_admin { put("isAdmin", v.map(Bson::Boolean)); }

        let mut update = Document::new();
        if !set.is_empty() { update.insert("$set", set); }
        if !unset.is_empty() { update.insert("$unset", unset); }
        update
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(v) = &self.name { user.name = v.clone(); }
        if let Some(v) = self.age { user.age = v; }
        if let Some(v) = &self.email { user.email = v.clone(); }
        if let Some(v) = &self.number { user.number = v.clone(); }
        if let Some(v) = &self.plan { user.plan = v.clone(); }
        if let Some(v) = self.is_admin { user.is_admin = v.unwrap_or(false); }
    }
}

// Whole numbers go out as integers, so `30` does not come back as `30.0`.
fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => serializer.serialize_i64(*n as i64),
        Some(n) => serializer.serialize_f64(*n),
        None => serializer.serialize_none(),
    }
}

fn collection(db: &Database) -> Collection<User> {
    db.collection(COLLECTION)
}

pub async fn find_all(db: &Database) -> Result<Vec<User>, ModelError> {
    let cursor = collection(db).find(doc! {}).await?;
    Ok(cursor.try_collect::<Vec<User>>().await?)
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<User>, ModelError> {
    Ok(collection(db).find_one(doc! { "_id": id }).await?)
}

pub async fn create(db: &Database, new: NewUser) -> Result<User, ModelError> {
    let inserted = db
        .collection::<NewUser>(COLLECTION)
        .insert_one(&new)
        .await?
        .inserted_id;
    let id = inserted
        .as_object_id()
        .ok_or_else(|| ModelError::Db(format!("unexpected _id type for user: {inserted}")))?;
    Ok(new.into_user(id))
}

/// Apply `patch` and return the post-update document, or `None` when no user has `id`.
pub async fn update_by_id(db: &Database, id: ObjectId, patch: &UserPatch) -> Result<Option<User>, ModelError> {
    if patch.is_empty() {
        return find_by_id(db, id).await;
    }
    let updated = collection(db)
        .find_one_and_update(doc! { "_id": id }, patch.to_update_document())
        .return_document(ReturnDocument::After)
        .await?;
    Ok(updated)
}

/// Returns whether a document was removed.
pub async fn delete_by_id(db: &Database, id: ObjectId) -> Result<bool, ModelError> {
    let res = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(res.deleted_count > 0)
}
