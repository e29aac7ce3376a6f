use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::opportunities::models::{
    Opportunity, OpportunityWithApplicationCount, OpportunityWithOrganization,
};

/// Request DTO for creating an opportunity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOpportunityDto {
    #[validate(email(message = "Invalid organization email"))]
    pub organization_mail: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: String,

    #[validate(range(min = 0, message = "Hours required must not be negative"))]
    pub hours_required: i32,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

/// Request DTO for updating an opportunity. Only supplied fields change;
/// the owning organization cannot be reassigned.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateOpportunityDto {
    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Hours required must not be negative"))]
    pub hours_required: Option<i32>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

/// Query params for listing an organization's opportunities
#[derive(Debug, Default, Deserialize)]
pub struct OrganizationOpportunitiesQuery {
    pub organization_mail: Option<String>,
}

/// Response DTO for opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityResponseDto {
    pub id: i64,
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

impl From<Opportunity> for OpportunityResponseDto {
    fn from(o: Opportunity) -> Self {
        Self {
            id: o.id,
            organization_mail: o.organization_mail,
            category: o.category,
            title: o.title,
            description: o.description,
            location: o.location,
            hours_required: o.hours_required,
            start_date: o.start_date,
            end_date: o.end_date,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Available opportunity with the display name of its organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableOpportunityDto {
    #[serde(flatten)]
    pub opportunity: OpportunityResponseDto,
    pub organization_name: String,
}

impl From<OpportunityWithOrganization> for AvailableOpportunityDto {
    fn from(row: OpportunityWithOrganization) -> Self {
        Self {
            opportunity: row.opportunity.into(),
            organization_name: row.organization_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityWithCountDto {
    #[serde(flatten)]
    pub opportunity: OpportunityResponseDto,
    pub application_count: i64,
}

impl From<OpportunityWithApplicationCount> for OpportunityWithCountDto {
    fn from(row: OpportunityWithApplicationCount) -> Self {
        Self {
            opportunity: row.opportunity.into(),
            application_count: row.application_count,
        }
    }
}
