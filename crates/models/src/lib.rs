//! Document schemas for the `blogs` and `users` collections and the
//! MongoDB access functions behind them.

pub mod errors;
pub mod db;
pub mod blog;
pub mod user;

use mongodb::bson::oid::ObjectId;

/// Parse a path identifier into an ObjectId.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, errors::ModelError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| errors::ModelError::Validation(format!("invalid id `{raw}`")))
}
