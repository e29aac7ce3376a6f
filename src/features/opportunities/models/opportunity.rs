use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for opportunity
#[derive(Debug, Clone, FromRow)]
pub struct Opportunity {
    pub id: i64,
    /// Email of the owning organization
    pub organization_mail: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub hours_required: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// The SQL filters on `end_date` directly; these mirror them for the in-memory store
#[cfg(test)]
impl Opportunity {
    /// An opportunity without an end date never expires and is never listed as available
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date.is_some_and(|end| end < now)
    }

    pub fn is_available_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date.is_some_and(|end| end >= now)
    }
}

/// Opportunity joined with the name of its organization
#[derive(Debug, Clone, FromRow)]
pub struct OpportunityWithOrganization {
    #[sqlx(flatten)]
    pub opportunity: Opportunity,
    pub organization_name: String,
}

/// Opportunity annotated with the number of applications it received
#[derive(Debug, Clone, FromRow)]
pub struct OpportunityWithApplicationCount {
    #[sqlx(flatten)]
    pub opportunity: Opportunity,
    pub application_count: i64,
}

#[derive(Debug, Clone)]
pub struct NewOpportunity {
    pub organization_mail: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub hours_required: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Fields to change; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct OpportunityPatch {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub hours_required: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
