use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::volunteers::dtos::{
    CreateVolunteerDto, UpdateVolunteerDto, VolunteerResponseDto,
};
use crate::features::volunteers::services::VolunteerService;
use crate::shared::types::MessageResponse;

/// Register a volunteer
pub async fn create_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppJson(dto): AppJson<CreateVolunteerDto>,
) -> Result<(StatusCode, Json<VolunteerResponseDto>)> {
    dto.validate()?;

    let volunteer = service.register(dto).await?;
    Ok((StatusCode::CREATED, Json(volunteer)))
}

pub async fn get_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<VolunteerResponseDto>> {
    Ok(Json(service.get(&email).await?))
}

pub async fn update_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppPath(email): AppPath<String>,
    AppJson(dto): AppJson<UpdateVolunteerDto>,
) -> Result<Json<VolunteerResponseDto>> {
    dto.validate()?;

    let volunteer = service.update(&email, dto).await?;
    Ok(Json(volunteer))
}

pub async fn delete_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppPath(email): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    service.delete(&email).await?;
    Ok(Json(MessageResponse::new("Volunteer deleted successfully")))
}
