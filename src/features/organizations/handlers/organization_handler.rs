use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::organizations::dtos::{
    CreateOrganizationDto, OrganizationResponseDto, UpdateOrganizationDto,
};
use crate::features::organizations::services::OrganizationService;
use crate::shared::types::MessageResponse;

/// Register an organization
pub async fn create_organization(
    State(service): State<Arc<OrganizationService>>,
    AppJson(dto): AppJson<CreateOrganizationDto>,
) -> Result<(StatusCode, Json<OrganizationResponseDto>)> {
    dto.validate()?;

    let organization = service.register(dto).await?;
    Ok((StatusCode::CREATED, Json(organization)))
}

pub async fn get_organization(
    State(service): State<Arc<OrganizationService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<OrganizationResponseDto>> {
    Ok(Json(service.get(&email).await?))
}

pub async fn update_organization(
    State(service): State<Arc<OrganizationService>>,
    AppPath(email): AppPath<String>,
    AppJson(dto): AppJson<UpdateOrganizationDto>,
) -> Result<Json<OrganizationResponseDto>> {
    dto.validate()?;

    let organization = service.update(&email, dto).await?;
    Ok(Json(organization))
}

/// Delete an organization along with its opportunities
pub async fn delete_organization(
    State(service): State<Arc<OrganizationService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    service.delete(&email).await?;
    Ok(Json(MessageResponse::new("Organization deleted successfully")))
}
