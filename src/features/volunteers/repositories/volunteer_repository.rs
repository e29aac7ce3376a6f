use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::volunteers::models::{NewVolunteer, Volunteer, VolunteerPatch};

#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    async fn insert(&self, volunteer: NewVolunteer) -> Result<Volunteer>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Volunteer>>;

    async fn update(&self, email: &str, patch: VolunteerPatch) -> Result<Option<Volunteer>>;

    /// Applications of the volunteer go with it (cascade)
    async fn delete(&self, email: &str) -> Result<bool>;
}

pub struct PgVolunteerRepository {
    pool: PgPool,
}

impl PgVolunteerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VolunteerRepository for PgVolunteerRepository {
    async fn insert(&self, volunteer: NewVolunteer) -> Result<Volunteer> {
        sqlx::query_as::<_, Volunteer>(
            r#"
            INSERT INTO volunteers
                (email, password, name, phone, location, bio, categories, available_hours)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, password, name, phone, location, bio, categories,
                      available_hours, created_at, updated_at
            "#,
        )
        .bind(&volunteer.email)
        .bind(&volunteer.password_hash)
        .bind(&volunteer.name)
        .bind(&volunteer.phone)
        .bind(&volunteer.location)
        .bind(&volunteer.bio)
        .bind(&volunteer.categories)
        .bind(volunteer.available_hours)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(
            r#"
            SELECT id, email, password, name, phone, location, bio, categories,
                   available_hours, created_at, updated_at
            FROM volunteers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(&self, email: &str, patch: VolunteerPatch) -> Result<Option<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(
            r#"
            UPDATE volunteers
            SET password = COALESCE($2, password),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                location = COALESCE($5, location),
                bio = COALESCE($6, bio),
                categories = COALESCE($7, categories),
                available_hours = COALESCE($8, available_hours),
                updated_at = NOW()
            WHERE email = $1
            RETURNING id, email, password, name, phone, location, bio, categories,
                      available_hours, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(patch.password_hash)
        .bind(patch.name)
        .bind(patch.phone)
        .bind(patch.location)
        .bind(patch.bio)
        .bind(patch.categories)
        .bind(patch.available_hours)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM volunteers WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
