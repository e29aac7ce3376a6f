use std::sync::Arc;

use crate::core::error::{AppError, OptionExt, Result};
use crate::features::volunteers::dtos::{
    CreateVolunteerDto, UpdateVolunteerDto, VolunteerResponseDto,
};
use crate::features::volunteers::models::{NewVolunteer, VolunteerPatch};
use crate::features::volunteers::repositories::VolunteerRepository;
use crate::shared::password::CredentialHasher;

/// Service for volunteer profiles
pub struct VolunteerService {
    repository: Arc<dyn VolunteerRepository>,
    hasher: CredentialHasher,
}

impl VolunteerService {
    pub fn new(repository: Arc<dyn VolunteerRepository>, hasher: CredentialHasher) -> Self {
        Self { repository, hasher }
    }

    pub async fn register(&self, dto: CreateVolunteerDto) -> Result<VolunteerResponseDto> {
        let password_hash = self.hasher.hash(&dto.password).await?;

        let volunteer = self
            .repository
            .insert(NewVolunteer {
                email: dto.email,
                password_hash,
                name: dto.name,
                phone: dto.phone,
                location: dto.location,
                bio: dto.bio,
                categories: dto.categories,
                available_hours: dto.available_hours,
            })
            .await?;

        tracing::info!(volunteer_id = volunteer.id, "Volunteer registered");
        Ok(volunteer.into())
    }

    pub async fn get(&self, email: &str) -> Result<VolunteerResponseDto> {
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("Volunteer", email)
            .map(Into::into)
    }

    pub async fn update(
        &self,
        email: &str,
        dto: UpdateVolunteerDto,
    ) -> Result<VolunteerResponseDto> {
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("Volunteer", email)?;

        let password_hash = self
            .hasher
            .hash_replacement(dto.password.as_deref())
            .await?;

        let patch = VolunteerPatch {
            password_hash,
            name: dto.name,
            phone: dto.phone,
            location: dto.location,
            bio: dto.bio,
            categories: dto.categories,
            available_hours: dto.available_hours,
        };

        self.repository
            .update(email, patch)
            .await?
            .or_not_found("Volunteer", email)
            .map(Into::into)
    }

    pub async fn delete(&self, email: &str) -> Result<()> {
        if !self.repository.delete(email).await? {
            return Err(AppError::NotFound(format!("Volunteer '{}' not found", email)));
        }

        tracing::info!(email = %email, "Volunteer deleted");
        Ok(())
    }
}
