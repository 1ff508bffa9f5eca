//! Post repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use scribe_shared::models::Post;
use sqlx::PgPool;

/// Post row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Post {
            id: record.id,
            title: record.title,
            content: record.content,
            author_id: record.author_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Post repository for database operations
pub struct PostRepository;

impl PostRepository {
    /// Insert a new post owned by `author_id`
    pub async fn create(
        pool: &PgPool,
        author_id: i64,
        title: &str,
        content: &str,
    ) -> Result<PostRecord> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Find post by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// List all posts, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<PostRecord>> {
        let posts = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Replace a post's title and content
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Delete a post, returning the number of affected rows
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
