pub mod domain;
pub mod repository;
pub mod service;

pub use domain::CreateBlogInput;
pub use repository::{BlogRepository, MemoryBlogRepository, MongoBlogRepository};
pub use service::BlogService;
