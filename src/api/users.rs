use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::types::dto::users::{
    CreateUserRequest, CreateUserResponse, UpdateUserRequest, UpdateUserResponse,
};

/// Users API
pub struct UsersApi;

/// API tags for user endpoints
#[derive(Tags)]
enum ApiTags {
    /// User management endpoints
    Users,
}

#[OpenApi]
impl UsersApi {
    /// Create a user
    ///
    /// The request body composes the user, the associated item and the request
    /// priority under their own keys. The priority defaults to medium and is
    /// always present in the response; `q` is echoed back when non-empty.
    #[oai(path = "/users/create/:user_id", method = "post", tag = "ApiTags::Users")]
    async fn create_user(
        &self,
        user_id: Path<i64>,
        q: Query<Option<String>>,
        body: Json<CreateUserRequest>,
    ) -> Json<CreateUserResponse> {
        let request = body.0;
        tracing::debug!(user_id = user_id.0, "creating user");

        Json(CreateUserResponse {
            user: request.user,
            item: request.item,
            q: q.0.filter(|q| !q.is_empty()),
            importance: request.importance,
        })
    }

    /// Update a user
    ///
    /// The user payload is embedded: the request body is `{"user": {...}}`,
    /// a flat user body at the top level is rejected.
    #[oai(path = "/users/:user_id", method = "put", tag = "ApiTags::Users")]
    async fn update_user(
        &self,
        user_id: Path<i64>,
        body: Json<UpdateUserRequest>,
    ) -> Json<UpdateUserResponse> {
        Json(UpdateUserResponse {
            user_id: user_id.0,
            user: body.0.user,
        })
    }
}
