//! Service layer providing the blog and user operations on top of models.
//! - Validates request schemas before any persistence call.
//! - Hides the backend (MongoDB or in-memory) behind repository traits.
//! - Reports failures as tagged [`errors::ServiceError`] values.

pub mod errors;
pub mod storage;
pub mod blog;
pub mod user;
pub mod store;

pub use store::Store;
