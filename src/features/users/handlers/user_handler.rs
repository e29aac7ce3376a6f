use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::MessageResponse;

/// Create a user account
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>)> {
    dto.validate()?;

    let user = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(service): State<Arc<UserService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<UserResponseDto>> {
    let user = service.get(&email).await?;
    Ok(Json(user))
}

/// Patch a user; omitted fields are left untouched
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    AppPath(email): AppPath<String>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<UserResponseDto>> {
    dto.validate()?;

    let user = service.update(&email, dto).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    service.delete(&email).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
