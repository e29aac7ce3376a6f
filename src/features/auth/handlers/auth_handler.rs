use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginDto, LoginResponseDto};
use crate::features::auth::services::AuthService;
use crate::features::organizations::dtos::OrganizationResponseDto;
use crate::features::volunteers::dtos::VolunteerResponseDto;

pub async fn login_volunteer(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<LoginResponseDto<VolunteerResponseDto>>> {
    dto.validate()?;
    Ok(Json(service.login_volunteer(dto).await?))
}

pub async fn login_organization(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<LoginResponseDto<OrganizationResponseDto>>> {
    dto.validate()?;
    Ok(Json(service.login_organization(dto).await?))
}
