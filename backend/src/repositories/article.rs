//! Article repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use scribe_shared::models::Article;
use sqlx::PgPool;

/// Article row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Article {
            id: record.id,
            title: record.title,
            body: record.body,
            author_id: record.author_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Article repository for database operations
pub struct ArticleRepository;

impl ArticleRepository {
    /// Insert a new article owned by `author_id`
    pub async fn create(
        pool: &PgPool,
        author_id: i64,
        title: &str,
        body: &str,
    ) -> Result<ArticleRecord> {
        let article = sqlx::query_as::<_, ArticleRecord>(
            r#"
            INSERT INTO articles (title, body, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, author_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(article)
    }

    /// Find article by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ArticleRecord>> {
        let article = sqlx::query_as::<_, ArticleRecord>(
            r#"
            SELECT id, title, body, author_id, created_at, updated_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(article)
    }

    /// List all articles, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<ArticleRecord>> {
        let articles = sqlx::query_as::<_, ArticleRecord>(
            r#"
            SELECT id, title, body, author_id, created_at, updated_at
            FROM articles
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Replace an article's title and body
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<Option<ArticleRecord>> {
        let article = sqlx::query_as::<_, ArticleRecord>(
            r#"
            UPDATE articles SET
                title = $2,
                body = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, body, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .fetch_optional(pool)
        .await?;

        Ok(article)
    }

    /// Delete an article, returning the number of affected rows
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the integration suites in tests/, which require a
    // database. Run with: cargo test -- --ignored
}
