use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::organizations::models::Organization;
use crate::shared::validation::{validate_new_password, PHONE_REGEX};

/// Request DTO for organization registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrganizationDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: String,
}

/// Request DTO for updating an organization. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateOrganizationDto {
    #[validate(custom(function = "validate_new_password"))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,
}

/// Response DTO for organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationResponseDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponseDto {
    fn from(o: Organization) -> Self {
        Self {
            id: o.id,
            email: o.email,
            name: o.name,
            phone: o.phone,
            location: o.location,
            description: o.description,
            website_url: o.website_url,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}
