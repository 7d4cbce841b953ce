use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub message: String,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BlogDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub content: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateBlogDoc {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub content: String,
}

#[derive(Serialize, ToSchema)]
pub struct BlogCreatedDoc {
    pub message: String,
    pub blog: BlogDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    pub number: Option<String>,
    pub plan: Option<String>,
    pub is_admin: bool,
}

/// Create and partial-update body; every field is optional.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInputDoc {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    pub number: Option<String>,
    pub plan: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct UserSavedDoc {
    pub message: String,
    pub user: UserDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::blogs::list,
        crate::routes::blogs::create,
        crate::routes::blogs::get,
        crate::routes::blogs::delete,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            BlogDoc,
            CreateBlogDoc,
            BlogCreatedDoc,
            UserDoc,
            UserInputDoc,
            UserSavedDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "blogs"),
        (name = "users")
    )
)]
pub struct ApiDoc;
