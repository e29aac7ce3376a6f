use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::users::models::{NewUser, User, UserPatch};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Returns `None` when no user has this email
    async fn update(&self, email: &str, patch: UserPatch) -> Result<Option<User>>;

    /// Returns whether a row was removed
    async fn delete(&self, email: &str) -> Result<bool>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, full_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password, full_name, role, created_at, updated_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, full_name, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(&self, email: &str, patch: UserPatch) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password = COALESCE($2, password),
                full_name = COALESCE($3, full_name),
                role = COALESCE($4, role),
                updated_at = NOW()
            WHERE email = $1
            RETURNING id, email, password, full_name, role, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(patch.password_hash)
        .bind(patch.full_name)
        .bind(patch.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
