use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of an application. Stored and serialized lowercase; the
/// capitalised spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Accepted")]
    Accepted,
    #[serde(alias = "Rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "Pending" => Ok(ApplicationStatus::Pending),
            "accepted" | "Accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" | "Rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!(
                "Unknown application status '{}', expected pending, accepted or rejected",
                other
            )),
        }
    }
}

/// Database model for application
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: i64,
    pub volunteer_id: i64,
    pub opportunity_id: i64,
    pub status: ApplicationStatus,
    pub cover_letter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application with the title of its opportunity and the owning organization's name
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithOpportunity {
    #[sqlx(flatten)]
    pub application: Application,
    pub opportunity_title: String,
    pub organization_name: String,
}

/// Application with the identity of the volunteer who submitted it
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithVolunteer {
    #[sqlx(flatten)]
    pub application: Application,
    pub volunteer_name: String,
    pub volunteer_email: String,
}

/// Work a volunteer has been accepted for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct VolunteerStatistics {
    pub total_jobs: i64,
    pub total_hours_worked: i64,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub volunteer_id: i64,
    pub opportunity_id: i64,
    pub status: ApplicationStatus,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub cover_letter: Option<String>,
}

/// Conditions combined with AND; `None` matches everything
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationFilter {
    pub volunteer_id: Option<i64>,
    pub opportunity_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

// Same predicate as the repository's WHERE clause, for the in-memory store
#[cfg(test)]
impl ApplicationFilter {
    pub fn matches(&self, application: &Application) -> bool {
        self.volunteer_id.is_none_or(|id| id == application.volunteer_id)
            && self
                .opportunity_id
                .is_none_or(|id| id == application.opportunity_id)
            && self.status.is_none_or(|status| status == application.status)
    }
}
