//! Post service
//!
//! Same ownership rules as articles: not-found and not-owned are the
//! same 404 to the caller.

use crate::error::ApiError;
use crate::repositories::PostRepository;
use scribe_shared::models::Post;
use scribe_shared::types::PostPayload;
use sqlx::PgPool;

/// Post service
pub struct PostService;

impl PostService {
    /// List all posts
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, ApiError> {
        let posts = PostRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a single post by id
    pub async fn get(pool: &PgPool, id: i64) -> Result<Post, ApiError> {
        let post = PostRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        Ok(post.into())
    }

    /// Create a post owned by the authenticated user
    pub async fn create(pool: &PgPool, author_id: i64, req: &PostPayload) -> Result<Post, ApiError> {
        let title = req.title.as_deref().unwrap_or_default();
        let content = req.content.as_deref().unwrap_or_default();

        let post = PostRepository::create(pool, author_id, title, content)
            .await
            .map_err(ApiError::Internal)?;

        Ok(post.into())
    }

    /// Replace a post's title and content, if owned by `auth_id`
    pub async fn update(
        pool: &PgPool,
        auth_id: i64,
        id: i64,
        req: &PostPayload,
    ) -> Result<Post, ApiError> {
        Self::find_owned(pool, auth_id, id).await?;

        let title = req.title.as_deref().unwrap_or_default();
        let content = req.content.as_deref().unwrap_or_default();

        let post = PostRepository::update(pool, id, title, content)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        Ok(post.into())
    }

    /// Delete a post, if owned by `auth_id`
    pub async fn delete(pool: &PgPool, auth_id: i64, id: i64) -> Result<(), ApiError> {
        Self::find_owned(pool, auth_id, id).await?;

        let affected = PostRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if affected == 0 {
            return Err(ApiError::NotFound("Post not found".to_string()));
        }

        Ok(())
    }

    async fn find_owned(pool: &PgPool, auth_id: i64, id: i64) -> Result<(), ApiError> {
        let post = PostRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        if post.author_id != auth_id {
            return Err(ApiError::NotFound("Post not found".to_string()));
        }

        Ok(())
    }
}
