use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::volunteers::models::Volunteer;
use crate::shared::validation::{validate_new_password, PHONE_REGEX};

/// Request DTO for volunteer registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVolunteerDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Bio must not exceed 5000 characters"))]
    pub bio: String,

    /// Names from the category catalog
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Available hours must not be negative"))]
    pub available_hours: i32,
}

/// Request DTO for updating a volunteer. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateVolunteerDto {
    #[validate(custom(function = "validate_new_password"))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 5000, message = "Bio must not exceed 5000 characters"))]
    pub bio: Option<String>,

    pub categories: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Available hours must not be negative"))]
    pub available_hours: Option<i32>,
}

/// Response DTO for volunteer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerResponseDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub available_hours: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Volunteer> for VolunteerResponseDto {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            email: v.email,
            name: v.name,
            phone: v.phone,
            location: v.location,
            bio: v.bio,
            categories: v.categories,
            available_hours: v.available_hours,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}
