use service::blog::BlogService;
use service::user::UserService;
use service::Store;

/// Router state: the per-collection services, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
    pub users: UserService,
}

impl AppState {
    pub fn from_store(store: &Store) -> Self {
        Self {
            blogs: store.blogs.clone(),
            users: store.users.clone(),
        }
    }
}
