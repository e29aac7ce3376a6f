use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::categories::models::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert every name not present yet and return how many rows were added.
    /// Existing rows are never modified.
    async fn insert_missing(&self, names: &[String]) -> Result<u64>;

    async fn list(&self) -> Result<Vec<Category>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn insert_missing(&self, names: &[String]) -> Result<u64> {
        // Single statement: concurrent seeds cannot both insert the same name
        let result = sqlx::query(
            r#"
            INSERT INTO categories (name)
            SELECT UNNEST($1::TEXT[])
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(handle_db_error)?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }
}
