//! API request and response types
//!
//! Request bodies keep every field optional so that missing fields reach
//! the validation pipeline (and come back as 400 with per-field messages)
//! instead of being rejected by the deserializer.

use crate::models::User;
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Full user update (PUT) — both fields required by the pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Partial user update (PATCH) — at least one field required by the pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialUpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Article create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Post create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Response for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Response for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
    pub token: String,
}

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}
