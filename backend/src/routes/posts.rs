//! Post CRUD routes
//!
//! Same shape as articles: public reads, token-protected mutations with
//! ownership on update/delete.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::PostService;
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use scribe_shared::models::Post;
use scribe_shared::types::PostPayload;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}

/// GET /posts
async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    let posts = PostService::list(state.db()).await?;
    Ok(Json(posts))
}

/// GET /posts/:id
async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Post>> {
    let id = validation::parse_id(&raw_id)?;
    let post = PostService::get(state.db(), id).await?;
    Ok(Json(post))
}

/// POST /posts
async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostPayload>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    validation::validate_post(&req).into_result()?;

    let post = PostService::create(state.db(), auth.user_id, &req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts/:id
async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
    Json(req): Json<PostPayload>,
) -> ApiResult<Json<Post>> {
    let id = validation::parse_id(&raw_id)?;
    validation::validate_post(&req).into_result()?;

    let post = PostService::update(state.db(), auth.user_id, id, &req).await?;
    Ok(Json(post))
}

/// DELETE /posts/:id
async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = validation::parse_id(&raw_id)?;
    PostService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
