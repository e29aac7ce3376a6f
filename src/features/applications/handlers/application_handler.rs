use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::applications::dtos::{
    ApplicationListQuery, ApplicationResponseDto, ApplicationWithOpportunityDto,
    ApplicationWithVolunteerDto, CreateApplicationDto, UpdateApplicationDto,
    VolunteerStatisticsDto,
};
use crate::features::applications::models::{ApplicationFilter, ApplicationStatus};
use crate::features::applications::services::ApplicationService;
use crate::shared::types::{CountQuery, MessageResponse};
use crate::shared::validation::{parse_count, parse_id, parse_optional_id};

/// Submit an application for a volunteer
pub async fn create_application(
    State(service): State<Arc<ApplicationService>>,
    AppJson(dto): AppJson<CreateApplicationDto>,
) -> Result<(StatusCode, Json<ApplicationResponseDto>)> {
    dto.validate()?;

    let application = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// List applications, optionally filtered by volunteer, opportunity and status
pub async fn list_applications(
    State(service): State<Arc<ApplicationService>>,
    AppQuery(query): AppQuery<ApplicationListQuery>,
) -> Result<Json<Vec<ApplicationResponseDto>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ApplicationStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let filter = ApplicationFilter {
        volunteer_id: parse_optional_id("volunteer_id", query.volunteer_id.as_deref())?,
        opportunity_id: parse_optional_id("opportunity_id", query.opportunity_id.as_deref())?,
        status,
    };

    Ok(Json(service.list(filter).await?))
}

pub async fn get_application(
    State(service): State<Arc<ApplicationService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApplicationResponseDto>> {
    let id = parse_id("id", &id)?;
    Ok(Json(service.get(id).await?))
}

pub async fn update_application(
    State(service): State<Arc<ApplicationService>>,
    AppPath(id): AppPath<String>,
    AppJson(dto): AppJson<UpdateApplicationDto>,
) -> Result<Json<ApplicationResponseDto>> {
    let id = parse_id("id", &id)?;
    dto.validate()?;

    Ok(Json(service.update(id, dto).await?))
}

pub async fn delete_application(
    State(service): State<Arc<ApplicationService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id("id", &id)?;
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Application deleted successfully")))
}

/// A volunteer's applications with opportunity title and organization name
pub async fn list_applications_for_volunteer(
    State(service): State<Arc<ApplicationService>>,
    AppPath(volunteer_id): AppPath<String>,
) -> Result<Json<Vec<ApplicationWithOpportunityDto>>> {
    let volunteer_id = parse_id("volunteer_id", &volunteer_id)?;
    Ok(Json(
        service.list_by_volunteer_with_details(volunteer_id).await?,
    ))
}

pub async fn list_approved_for_volunteer(
    State(service): State<Arc<ApplicationService>>,
    AppPath(volunteer_id): AppPath<String>,
    AppQuery(query): AppQuery<CountQuery>,
) -> Result<Json<Vec<ApplicationResponseDto>>> {
    let volunteer_id = parse_id("volunteer_id", &volunteer_id)?;
    let n = parse_count(query.n.as_deref())?;
    Ok(Json(
        service.last_approved_for_volunteer(volunteer_id, n).await?,
    ))
}

/// Applicants of an opportunity with their names and emails
pub async fn list_applications_for_opportunity(
    State(service): State<Arc<ApplicationService>>,
    AppPath(opportunity_id): AppPath<String>,
) -> Result<Json<Vec<ApplicationWithVolunteerDto>>> {
    let opportunity_id = parse_id("opportunity_id", &opportunity_id)?;
    Ok(Json(
        service
            .list_by_opportunity_with_volunteer(opportunity_id)
            .await?,
    ))
}

pub async fn get_volunteer_statistics(
    State(service): State<Arc<ApplicationService>>,
    AppPath(volunteer_id): AppPath<String>,
) -> Result<Json<VolunteerStatisticsDto>> {
    let volunteer_id = parse_id("volunteer_id", &volunteer_id)?;
    Ok(Json(service.volunteer_statistics(volunteer_id).await?))
}
