use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::opportunities::models::{
    NewOpportunity, Opportunity, OpportunityPatch, OpportunityWithApplicationCount,
    OpportunityWithOrganization,
};

#[async_trait]
pub trait OpportunityRepository: Send + Sync {
    async fn insert(&self, opportunity: NewOpportunity) -> Result<Opportunity>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Opportunity>>;

    async fn update(&self, id: i64, patch: OpportunityPatch) -> Result<Option<Opportunity>>;

    async fn delete(&self, id: i64) -> Result<bool>;

    /// Opportunities with `end_date >= now`, earliest start first
    async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<OpportunityWithOrganization>>;

    /// The organization's opportunities with `end_date < now`, latest end first
    async fn last_expired_for_organization(
        &self,
        organization_mail: &str,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>>;

    async fn list_with_application_counts(
        &self,
        organization_mail: &str,
    ) -> Result<Vec<OpportunityWithApplicationCount>>;

    /// Expired opportunities where the volunteer holds an accepted application
    async fn last_completed_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>>;
}

pub struct PgOpportunityRepository {
    pool: PgPool,
}

impl PgOpportunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OpportunityRepository for PgOpportunityRepository {
    async fn insert(&self, opportunity: NewOpportunity) -> Result<Opportunity> {
        sqlx::query_as::<_, Opportunity>(
            r#"
            INSERT INTO opportunities
                (organization_mail, category, title, description, location,
                 hours_required, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, organization_mail, category, title, description, location,
                      hours_required, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(&opportunity.organization_mail)
        .bind(&opportunity.category)
        .bind(&opportunity.title)
        .bind(&opportunity.description)
        .bind(&opportunity.location)
        .bind(opportunity.hours_required)
        .bind(opportunity.start_date)
        .bind(opportunity.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Opportunity>> {
        sqlx::query_as::<_, Opportunity>(
            r#"
            SELECT id, organization_mail, category, title, description, location,
                   hours_required, start_date, end_date, created_at, updated_at
            FROM opportunities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(&self, id: i64, patch: OpportunityPatch) -> Result<Option<Opportunity>> {
        sqlx::query_as::<_, Opportunity>(
            r#"
            UPDATE opportunities
            SET category = COALESCE($2, category),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                hours_required = COALESCE($6, hours_required),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, organization_mail, category, title, description, location,
                      hours_required, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.category)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.location)
        .bind(patch.hours_required)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<OpportunityWithOrganization>> {
        sqlx::query_as::<_, OpportunityWithOrganization>(
            r#"
            SELECT o.id, o.organization_mail, o.category, o.title, o.description, o.location,
                   o.hours_required, o.start_date, o.end_date, o.created_at, o.updated_at,
                   org.name AS organization_name
            FROM opportunities o
            JOIN organizations org ON org.email = o.organization_mail
            WHERE o.end_date >= $1
            ORDER BY o.start_date ASC NULLS LAST, o.id ASC
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn last_expired_for_organization(
        &self,
        organization_mail: &str,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>> {
        sqlx::query_as::<_, Opportunity>(
            r#"
            SELECT id, organization_mail, category, title, description, location,
                   hours_required, start_date, end_date, created_at, updated_at
            FROM opportunities
            WHERE organization_mail = $1 AND end_date < $2
            ORDER BY end_date DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(organization_mail)
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn list_with_application_counts(
        &self,
        organization_mail: &str,
    ) -> Result<Vec<OpportunityWithApplicationCount>> {
        sqlx::query_as::<_, OpportunityWithApplicationCount>(
            r#"
            SELECT o.id, o.organization_mail, o.category, o.title, o.description, o.location,
                   o.hours_required, o.start_date, o.end_date, o.created_at, o.updated_at,
                   COUNT(a.id) AS application_count
            FROM opportunities o
            LEFT JOIN applications a ON a.opportunity_id = o.id
            WHERE o.organization_mail = $1
            GROUP BY o.id
            ORDER BY o.id ASC
            "#,
        )
        .bind(organization_mail)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn last_completed_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>> {
        // EXISTS keeps one row per opportunity even with duplicate applications
        sqlx::query_as::<_, Opportunity>(
            r#"
            SELECT o.id, o.organization_mail, o.category, o.title, o.description, o.location,
                   o.hours_required, o.start_date, o.end_date, o.created_at, o.updated_at
            FROM opportunities o
            WHERE o.end_date < $2
              AND EXISTS (
                  SELECT 1
                  FROM applications a
                  WHERE a.opportunity_id = o.id
                    AND a.volunteer_id = $1
                    AND a.status = 'accepted'
              )
            ORDER BY o.end_date DESC, o.id DESC
            LIMIT $3
            "#,
        )
        .bind(volunteer_id)
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }
}
