use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginDto, LoginResponseDto};
use crate::features::organizations::dtos::OrganizationResponseDto;
use crate::features::organizations::OrganizationRepository;
use crate::features::volunteers::dtos::VolunteerResponseDto;
use crate::features::volunteers::VolunteerRepository;
use crate::shared::constants::INVALID_CREDENTIALS;
use crate::shared::password::CredentialHasher;

/// Password login for volunteers and organizations.
///
/// There is no session or token: a successful login only returns the account.
pub struct AuthService {
    volunteers: Arc<dyn VolunteerRepository>,
    organizations: Arc<dyn OrganizationRepository>,
    hasher: CredentialHasher,
}

impl AuthService {
    pub fn new(
        volunteers: Arc<dyn VolunteerRepository>,
        organizations: Arc<dyn OrganizationRepository>,
        hasher: CredentialHasher,
    ) -> Self {
        Self {
            volunteers,
            organizations,
            hasher,
        }
    }

    pub async fn login_volunteer(
        &self,
        dto: LoginDto,
    ) -> Result<LoginResponseDto<VolunteerResponseDto>> {
        let volunteer = self.volunteers.find_by_email(&dto.email).await?;
        let stored = volunteer.as_ref().map(|v| v.password.as_str());

        self.check_password(stored, &dto.password).await?;

        match volunteer {
            Some(volunteer) => {
                tracing::info!(volunteer_id = volunteer.id, "Volunteer logged in");
                Ok(LoginResponseDto {
                    user: volunteer.into(),
                })
            }
            None => Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
        }
    }

    pub async fn login_organization(
        &self,
        dto: LoginDto,
    ) -> Result<LoginResponseDto<OrganizationResponseDto>> {
        let organization = self.organizations.find_by_email(&dto.email).await?;
        let stored = organization.as_ref().map(|o| o.password.as_str());

        self.check_password(stored, &dto.password).await?;

        match organization {
            Some(organization) => {
                tracing::info!(organization_id = organization.id, "Organization logged in");
                Ok(LoginResponseDto {
                    user: organization.into(),
                })
            }
            None => Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
        }
    }

    /// Unknown account and wrong password fail the same way, after the same work
    async fn check_password(&self, stored: Option<&str>, password: &str) -> Result<()> {
        let matches = match stored {
            Some(hash) => self.hasher.verify(password, hash).await?,
            None => self.hasher.verify_dummy(password).await?,
        };

        if matches {
            Ok(())
        } else {
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}
