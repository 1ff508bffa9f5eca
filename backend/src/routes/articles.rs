//! Article CRUD routes
//!
//! Reads are public; create/update/delete require a bearer token, and
//! update/delete additionally require ownership.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ArticleService;
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use scribe_shared::models::Article;
use scribe_shared::types::ArticlePayload;

/// Create article routes
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

/// GET /articles
async fn list_articles(State(state): State<AppState>) -> ApiResult<Json<Vec<Article>>> {
    let articles = ArticleService::list(state.db()).await?;
    Ok(Json(articles))
}

/// GET /articles/:id
async fn get_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Article>> {
    let id = validation::parse_id(&raw_id)?;
    let article = ArticleService::get(state.db(), id).await?;
    Ok(Json(article))
}

/// POST /articles
async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ArticlePayload>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    validation::validate_article(&req).into_result()?;

    let article = ArticleService::create(state.db(), auth.user_id, &req).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /articles/:id
async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
    Json(req): Json<ArticlePayload>,
) -> ApiResult<Json<Article>> {
    let id = validation::parse_id(&raw_id)?;
    validation::validate_article(&req).into_result()?;

    let article = ArticleService::update(state.db(), auth.user_id, id, &req).await?;
    Ok(Json(article))
}

/// DELETE /articles/:id
async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = validation::parse_id(&raw_id)?;
    ArticleService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
