use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::applications::models::{
    Application, ApplicationStatus, ApplicationWithOpportunity, ApplicationWithVolunteer,
    VolunteerStatistics,
};

/// Request DTO for applying to an opportunity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApplicationDto {
    #[validate(range(min = 1, message = "volunteer_id must be a positive id"))]
    pub volunteer_id: i64,

    #[validate(range(min = 1, message = "opportunity_id must be a positive id"))]
    pub opportunity_id: i64,

    /// Defaults to `pending`
    #[serde(default)]
    pub status: ApplicationStatus,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Cover letter must not exceed 10000 characters"))]
    pub cover_letter: String,
}

/// Request DTO for updating an application (organization decision or
/// volunteer editing the cover letter)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateApplicationDto {
    pub status: Option<ApplicationStatus>,

    #[validate(length(max = 10000, message = "Cover letter must not exceed 10000 characters"))]
    pub cover_letter: Option<String>,
}

/// Raw filters of `GET /applications`; parsed by the handler so malformed
/// values produce a 400 with a precise message
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListQuery {
    pub volunteer_id: Option<String>,
    pub opportunity_id: Option<String>,
    pub status: Option<String>,
}

/// Response DTO for application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponseDto {
    pub id: i64,
    pub volunteer_id: i64,
    pub opportunity_id: i64,
    pub status: ApplicationStatus,
    pub cover_letter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponseDto {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            volunteer_id: a.volunteer_id,
            opportunity_id: a.opportunity_id,
            status: a.status,
            cover_letter: a.cover_letter,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithOpportunityDto {
    #[serde(flatten)]
    pub application: ApplicationResponseDto,
    pub opportunity_title: String,
    pub organization_name: String,
}

impl From<ApplicationWithOpportunity> for ApplicationWithOpportunityDto {
    fn from(row: ApplicationWithOpportunity) -> Self {
        Self {
            application: row.application.into(),
            opportunity_title: row.opportunity_title,
            organization_name: row.organization_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithVolunteerDto {
    #[serde(flatten)]
    pub application: ApplicationResponseDto,
    pub volunteer_name: String,
    pub volunteer_email: String,
}

impl From<ApplicationWithVolunteer> for ApplicationWithVolunteerDto {
    fn from(row: ApplicationWithVolunteer) -> Self {
        Self {
            application: row.application.into(),
            volunteer_name: row.volunteer_name,
            volunteer_email: row.volunteer_email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerStatisticsDto {
    pub volunteer_id: i64,
    /// Accepted applications
    pub total_jobs: i64,
    /// Sum of `hours_required` over the accepted applications' opportunities
    pub total_hours_worked: i64,
}

impl VolunteerStatisticsDto {
    pub fn new(volunteer_id: i64, stats: VolunteerStatistics) -> Self {
        Self {
            volunteer_id,
            total_jobs: stats.total_jobs,
            total_hours_worked: stats.total_hours_worked,
        }
    }
}
