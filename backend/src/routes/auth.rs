//! Authentication routes
//!
//! Registration and login. Both run their validation pipeline before any
//! business logic; password work happens on the blocking thread pool.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use crate::validation;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use scribe_shared::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    validation::validate_registration(&req).into_result()?;

    let user = UserService::register(state.db(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    validation::validate_login(&req).into_result()?;

    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    let (user, token) = UserService::login(state.db(), state.tokens(), email, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
        token,
    }))
}
