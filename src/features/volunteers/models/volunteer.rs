use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for volunteer
#[derive(Debug, Clone, FromRow)]
pub struct Volunteer {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    /// Category names the volunteer is interested in
    pub categories: Vec<String>,
    pub available_hours: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVolunteer {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub available_hours: i32,
}

#[derive(Debug, Clone, Default)]
pub struct VolunteerPatch {
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub categories: Option<Vec<String>>,
    pub available_hours: Option<i32>,
}
