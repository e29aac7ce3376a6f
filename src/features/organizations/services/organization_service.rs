use std::sync::Arc;

use crate::core::error::{AppError, OptionExt, Result};
use crate::features::organizations::dtos::{
    CreateOrganizationDto, OrganizationResponseDto, UpdateOrganizationDto,
};
use crate::features::organizations::models::{NewOrganization, OrganizationPatch};
use crate::features::organizations::repositories::OrganizationRepository;
use crate::shared::password::CredentialHasher;

/// Service for organization profiles
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepository>,
    hasher: CredentialHasher,
}

impl OrganizationService {
    pub fn new(repository: Arc<dyn OrganizationRepository>, hasher: CredentialHasher) -> Self {
        Self { repository, hasher }
    }

    pub async fn register(&self, dto: CreateOrganizationDto) -> Result<OrganizationResponseDto> {
        let password_hash = self.hasher.hash(&dto.password).await?;

        let organization = self
            .repository
            .insert(NewOrganization {
                email: dto.email,
                password_hash,
                name: dto.name,
                phone: dto.phone,
                location: dto.location,
                description: dto.description,
                website_url: dto.website_url,
            })
            .await?;

        tracing::info!(organization_id = organization.id, "Organization registered");
        Ok(organization.into())
    }

    pub async fn get(&self, email: &str) -> Result<OrganizationResponseDto> {
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("Organization", email)
            .map(Into::into)
    }

    pub async fn update(
        &self,
        email: &str,
        dto: UpdateOrganizationDto,
    ) -> Result<OrganizationResponseDto> {
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("Organization", email)?;

        let password_hash = self
            .hasher
            .hash_replacement(dto.password.as_deref())
            .await?;

        let patch = OrganizationPatch {
            password_hash,
            name: dto.name,
            phone: dto.phone,
            location: dto.location,
            description: dto.description,
            website_url: dto.website_url,
        };

        self.repository
            .update(email, patch)
            .await?
            .or_not_found("Organization", email)
            .map(Into::into)
    }

    pub async fn delete(&self, email: &str) -> Result<()> {
        if !self.repository.delete(email).await? {
            return Err(AppError::NotFound(format!(
                "Organization '{}' not found",
                email
            )));
        }

        tracing::info!(email = %email, "Organization deleted");
        Ok(())
    }
}
