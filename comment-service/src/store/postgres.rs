/// PostgreSQL-backed store
use crate::error::{AppError, Result};
use crate::models::{Comment, Item};
use crate::store::ContentStore;
use sqlx::PgPool;
use uuid::Uuid;

/// sqlx-backed implementation of [`ContentStore`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the items/comments tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS comments (
                id UUID PRIMARY KEY,
                seq BIGSERIAL NOT NULL,
                item_id UUID NOT NULL REFERENCES items(id) ON DELETE CASCADE,
                user_id UUID NOT NULL,
                author_name TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_comments_item_id ON comments (item_id, seq)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// True when the error is a foreign-key violation (SQLSTATE 23503), which
/// here means the parent item vanished between lookup and insert.
fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503")
    )
}

#[async_trait::async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn find_item(&self, item_id: Uuid) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, created_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn create_comment(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        author_name: &str,
        body: &str,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, item_id, user_id, author_name, body)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, item_id, user_id, author_name, body, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(item_id)
        .bind(user_id)
        .bind(author_name)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_fk_violation(&e) {
                AppError::NotFound(format!("item {item_id} not found"))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(comment)
    }

    async fn comments_for_item(&self, item_id: Uuid) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, item_id, user_id, author_name, body, created_at
            FROM comments
            WHERE item_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn comment_count(&self, item_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE item_id = $1")
                .bind(item_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
