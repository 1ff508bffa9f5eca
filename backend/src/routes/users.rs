//! User CRUD routes
//!
//! Reads are public; mutations require a bearer token and are limited to
//! the account owner (a mismatch is reported as 404, like a missing
//! user).

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use scribe_shared::models::User;
use scribe_shared::types::{PartialUpdateUserRequest, UpdateUserRequest};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users)).route(
        "/:id",
        get(get_user)
            .put(update_user)
            .patch(patch_user)
            .delete(delete_user),
    )
}

/// GET /users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = UserService::list(state.db()).await?;
    Ok(Json(users))
}

/// GET /users/:id
async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = validation::parse_id(&raw_id)?;
    let user = UserService::get(state.db(), id).await?;
    Ok(Json(user))
}

/// PUT /users/:id — full identity update
async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let id = validation::parse_id(&raw_id)?;
    validation::validate_required_update(&req).into_result()?;

    let user = UserService::update(state.db(), auth.user_id, id, &req).await?;
    Ok(Json(user))
}

/// PATCH /users/:id — partial identity update
async fn patch_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
    Json(req): Json<PartialUpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let id = validation::parse_id(&raw_id)?;
    validation::validate_partial_update(&req).into_result()?;

    let user = UserService::update_partial(state.db(), auth.user_id, id, &req).await?;
    Ok(Json(user))
}

/// DELETE /users/:id
async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = validation::parse_id(&raw_id)?;
    UserService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
