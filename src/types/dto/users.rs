use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use crate::types::dto::items::Item;

/// User payload with a validated age
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name of the user
    pub name: String,

    /// Age in years, 0 to 120 inclusive
    #[oai(validator(minimum(value = 0.0), maximum(value = 120.0)))]
    pub age: i32,
}

/// Priority attached to a user creation request
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Medium
    }
}

/// Request body for user creation
///
/// Composes two payloads and a priority under their own keys; the body is
/// `{"user": {...}, "item": {...}, "importance": "..."}`.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The user to create
    pub user: User,

    /// Item associated with the new user
    pub item: Item,

    /// Priority of the request, defaults to medium
    #[oai(default)]
    #[serde(default)]
    pub importance: Importance,
}

/// Response model for user creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// The created user, echoed back
    pub user: User,

    /// The associated item, echoed back
    pub item: Item,

    /// Query string echoed back when one was supplied
    pub q: Option<String>,

    /// Effective priority of the request
    pub importance: Importance,
}

/// Request body for user update
///
/// The user payload is embedded under its own key: the body is
/// `{"user": {...}}`, not the bare user fields.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// The replacement user record
    pub user: User,
}

/// Response model for user update
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    /// Identifier taken from the request path
    pub user_id: i64,

    /// The updated user, echoed back
    pub user: User,
}
