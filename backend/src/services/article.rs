//! Article service
//!
//! Ownership is checked here, before any mutation: updating or deleting
//! someone else's article reports the same 404 a missing article would,
//! so existence of other users' resources is never leaked.

use crate::error::ApiError;
use crate::repositories::ArticleRepository;
use scribe_shared::models::Article;
use scribe_shared::types::ArticlePayload;
use sqlx::PgPool;

/// Article service
pub struct ArticleService;

impl ArticleService {
    /// List all articles
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, ApiError> {
        let articles = ArticleRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(articles.into_iter().map(Article::from).collect())
    }

    /// Get a single article by id
    pub async fn get(pool: &PgPool, id: i64) -> Result<Article, ApiError> {
        let article = ArticleRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

        Ok(article.into())
    }

    /// Create an article owned by the authenticated user
    pub async fn create(
        pool: &PgPool,
        author_id: i64,
        req: &ArticlePayload,
    ) -> Result<Article, ApiError> {
        let title = req.title.as_deref().unwrap_or_default();
        let body = req.body.as_deref().unwrap_or_default();

        let article = ArticleRepository::create(pool, author_id, title, body)
            .await
            .map_err(ApiError::Internal)?;

        Ok(article.into())
    }

    /// Replace an article's title and body, if owned by `auth_id`
    pub async fn update(
        pool: &PgPool,
        auth_id: i64,
        id: i64,
        req: &ArticlePayload,
    ) -> Result<Article, ApiError> {
        Self::find_owned(pool, auth_id, id).await?;

        let title = req.title.as_deref().unwrap_or_default();
        let body = req.body.as_deref().unwrap_or_default();

        let article = ArticleRepository::update(pool, id, title, body)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

        Ok(article.into())
    }

    /// Delete an article, if owned by `auth_id`
    pub async fn delete(pool: &PgPool, auth_id: i64, id: i64) -> Result<(), ApiError> {
        Self::find_owned(pool, auth_id, id).await?;

        let affected = ArticleRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if affected == 0 {
            return Err(ApiError::NotFound("Article not found".to_string()));
        }

        Ok(())
    }

    /// Ownership precondition for mutations: missing and not-owned are
    /// deliberately the same error
    async fn find_owned(pool: &PgPool, auth_id: i64, id: i64) -> Result<(), ApiError> {
        let article = ArticleRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

        if article.author_id != auth_id {
            return Err(ApiError::NotFound("Article not found".to_string()));
        }

        Ok(())
    }
}
