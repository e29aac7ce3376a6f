use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::applications::models::{
    Application, ApplicationFilter, ApplicationPatch, ApplicationWithOpportunity,
    ApplicationWithVolunteer, NewApplication, VolunteerStatistics,
};

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn insert(&self, application: NewApplication) -> Result<Application>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>>;

    async fn update(&self, id: i64, patch: ApplicationPatch) -> Result<Option<Application>>;

    async fn delete(&self, id: i64) -> Result<bool>;

    async fn list(&self, filter: ApplicationFilter) -> Result<Vec<Application>>;

    /// Newest first
    async fn list_by_volunteer_with_details(
        &self,
        volunteer_id: i64,
    ) -> Result<Vec<ApplicationWithOpportunity>>;

    async fn list_by_opportunity_with_volunteer(
        &self,
        opportunity_id: i64,
    ) -> Result<Vec<ApplicationWithVolunteer>>;

    /// Accepted applications, newest first
    async fn last_approved_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
    ) -> Result<Vec<Application>>;

    /// Job count and hour total in one statement
    async fn volunteer_statistics(&self, volunteer_id: i64) -> Result<VolunteerStatistics>;
}

pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn insert(&self, application: NewApplication) -> Result<Application> {
        sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (volunteer_id, opportunity_id, status, cover_letter)
            VALUES ($1, $2, $3, $4)
            RETURNING id, volunteer_id, opportunity_id, status, cover_letter,
                      created_at, updated_at
            "#,
        )
        .bind(application.volunteer_id)
        .bind(application.opportunity_id)
        .bind(application.status)
        .bind(&application.cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT id, volunteer_id, opportunity_id, status, cover_letter,
                   created_at, updated_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(&self, id: i64, patch: ApplicationPatch) -> Result<Option<Application>> {
        sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = COALESCE($2, status),
                cover_letter = COALESCE($3, cover_letter),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, volunteer_id, opportunity_id, status, cover_letter,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.status)
        .bind(patch.cover_letter)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: ApplicationFilter) -> Result<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT id, volunteer_id, opportunity_id, status, cover_letter,
                   created_at, updated_at
            FROM applications
            WHERE ($1::BIGINT IS NULL OR volunteer_id = $1)
              AND ($2::BIGINT IS NULL OR opportunity_id = $2)
              AND ($3::application_status IS NULL OR status = $3)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.volunteer_id)
        .bind(filter.opportunity_id)
        .bind(filter.status)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn list_by_volunteer_with_details(
        &self,
        volunteer_id: i64,
    ) -> Result<Vec<ApplicationWithOpportunity>> {
        sqlx::query_as::<_, ApplicationWithOpportunity>(
            r#"
            SELECT a.id, a.volunteer_id, a.opportunity_id, a.status, a.cover_letter,
                   a.created_at, a.updated_at,
                   o.title AS opportunity_title,
                   org.name AS organization_name
            FROM applications a
            JOIN opportunities o ON o.id = a.opportunity_id
            JOIN organizations org ON org.email = o.organization_mail
            WHERE a.volunteer_id = $1
            ORDER BY a.created_at DESC, a.id DESC
            "#,
        )
        .bind(volunteer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn list_by_opportunity_with_volunteer(
        &self,
        opportunity_id: i64,
    ) -> Result<Vec<ApplicationWithVolunteer>> {
        sqlx::query_as::<_, ApplicationWithVolunteer>(
            r#"
            SELECT a.id, a.volunteer_id, a.opportunity_id, a.status, a.cover_letter,
                   a.created_at, a.updated_at,
                   v.name AS volunteer_name,
                   v.email AS volunteer_email
            FROM applications a
            JOIN volunteers v ON v.id = a.volunteer_id
            WHERE a.opportunity_id = $1
            ORDER BY a.id ASC
            "#,
        )
        .bind(opportunity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn last_approved_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
    ) -> Result<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT id, volunteer_id, opportunity_id, status, cover_letter,
                   created_at, updated_at
            FROM applications
            WHERE volunteer_id = $1 AND status = 'accepted'
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(volunteer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn volunteer_statistics(&self, volunteer_id: i64) -> Result<VolunteerStatistics> {
        // Aggregates without GROUP BY always yield exactly one row
        sqlx::query_as::<_, VolunteerStatistics>(
            r#"
            SELECT COUNT(a.id) AS total_jobs,
                   COALESCE(SUM(o.hours_required), 0)::BIGINT AS total_hours_worked
            FROM applications a
            JOIN opportunities o ON o.id = a.opportunity_id
            WHERE a.volunteer_id = $1 AND a.status = 'accepted'
            "#,
        )
        .bind(volunteer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }
}
