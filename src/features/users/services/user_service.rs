use std::sync::Arc;

use crate::core::error::{AppError, OptionExt, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::{NewUser, UserPatch};
use crate::features::users::repositories::UserRepository;
use crate::shared::password::CredentialHasher;

/// Service for user account operations
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: CredentialHasher,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: CredentialHasher) -> Self {
        Self { repository, hasher }
    }

    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let password_hash = self.hasher.hash(&dto.password).await?;

        let user = self
            .repository
            .insert(NewUser {
                email: dto.email,
                password_hash,
                full_name: dto.full_name,
                role: dto.role,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    pub async fn get(&self, email: &str) -> Result<UserResponseDto> {
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("User", email)
            .map(Into::into)
    }

    pub async fn update(&self, email: &str, dto: UpdateUserDto) -> Result<UserResponseDto> {
        // Only hash once the account is known to exist
        self.repository
            .find_by_email(email)
            .await?
            .or_not_found("User", email)?;

        let password_hash = self
            .hasher
            .hash_replacement(dto.password.as_deref())
            .await?;

        let patch = UserPatch {
            password_hash,
            full_name: dto.full_name,
            role: dto.role,
        };

        self.repository
            .update(email, patch)
            .await?
            .or_not_found("User", email)
            .map(Into::into)
    }

    pub async fn delete(&self, email: &str) -> Result<()> {
        if !self.repository.delete(email).await? {
            return Err(AppError::NotFound(format!("User '{}' not found", email)));
        }

        tracing::info!(email = %email, "User deleted");
        Ok(())
    }
}
