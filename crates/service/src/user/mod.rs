pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{CreateUserInput, UpdateUserInput};
pub use repository::{MemoryUserRepository, MongoUserRepository, UserRepository};
pub use service::UserService;
