use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::organizations::models::{NewOrganization, Organization, OrganizationPatch};

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn insert(&self, organization: NewOrganization) -> Result<Organization>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>>;

    async fn update(
        &self,
        email: &str,
        patch: OrganizationPatch,
    ) -> Result<Option<Organization>>;

    /// Opportunities (and their applications) are removed with the organization
    async fn delete(&self, email: &str) -> Result<bool>;
}

pub struct PgOrganizationRepository {
    pool: PgPool,
}

impl PgOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    async fn insert(&self, organization: NewOrganization) -> Result<Organization> {
        sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations
                (email, password, name, phone, location, description, website_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, password, name, phone, location, description,
                      website_url, created_at, updated_at
            "#,
        )
        .bind(&organization.email)
        .bind(&organization.password_hash)
        .bind(&organization.name)
        .bind(&organization.phone)
        .bind(&organization.location)
        .bind(&organization.description)
        .bind(&organization.website_url)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>> {
        sqlx::query_as::<_, Organization>(
            r#"
            SELECT id, email, password, name, phone, location, description,
                   website_url, created_at, updated_at
            FROM organizations
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn update(
        &self,
        email: &str,
        patch: OrganizationPatch,
    ) -> Result<Option<Organization>> {
        sqlx::query_as::<_, Organization>(
            r#"
            UPDATE organizations
            SET password = COALESCE($2, password),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                location = COALESCE($5, location),
                description = COALESCE($6, description),
                website_url = COALESCE($7, website_url),
                updated_at = NOW()
            WHERE email = $1
            RETURNING id, email, password, name, phone, location, description,
                      website_url, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(patch.password_hash)
        .bind(patch.name)
        .bind(patch.phone)
        .bind(patch.location)
        .bind(patch.description)
        .bind(patch.website_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM organizations WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
