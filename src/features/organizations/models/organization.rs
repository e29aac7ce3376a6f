use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for organization
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub description: String,
    pub website_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct OrganizationPatch {
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
}
