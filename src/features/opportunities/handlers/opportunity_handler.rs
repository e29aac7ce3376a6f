use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::opportunities::dtos::{
    AvailableOpportunityDto, CreateOpportunityDto, OpportunityResponseDto,
    OpportunityWithCountDto, OrganizationOpportunitiesQuery, UpdateOpportunityDto,
};
use crate::features::opportunities::services::OpportunityService;
use crate::shared::types::{CountQuery, MessageResponse};
use crate::shared::validation::{parse_count, parse_id};

/// Create an opportunity for an existing organization
pub async fn create_opportunity(
    State(service): State<Arc<OpportunityService>>,
    AppJson(dto): AppJson<CreateOpportunityDto>,
) -> Result<(StatusCode, Json<OpportunityResponseDto>)> {
    dto.validate()?;

    let opportunity = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(opportunity)))
}

pub async fn get_opportunity(
    State(service): State<Arc<OpportunityService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<OpportunityResponseDto>> {
    let id = parse_id("id", &id)?;
    Ok(Json(service.get(id).await?))
}

pub async fn update_opportunity(
    State(service): State<Arc<OpportunityService>>,
    AppPath(id): AppPath<String>,
    AppJson(dto): AppJson<UpdateOpportunityDto>,
) -> Result<Json<OpportunityResponseDto>> {
    let id = parse_id("id", &id)?;
    dto.validate()?;

    Ok(Json(service.update(id, dto).await?))
}

/// Delete an opportunity; its applications are removed with it
pub async fn delete_opportunity(
    State(service): State<Arc<OpportunityService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id("id", &id)?;
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Opportunity deleted successfully")))
}

/// Opportunities whose end date has not passed, with organization names
pub async fn list_available_opportunities(
    State(service): State<Arc<OpportunityService>>,
) -> Result<Json<Vec<AvailableOpportunityDto>>> {
    Ok(Json(service.list_available(Utc::now()).await?))
}

/// An organization's opportunities with their application counts
pub async fn list_organization_opportunities(
    State(service): State<Arc<OpportunityService>>,
    AppQuery(query): AppQuery<OrganizationOpportunitiesQuery>,
) -> Result<Json<Vec<OpportunityWithCountDto>>> {
    let organization_mail = query.organization_mail.unwrap_or_default();
    Ok(Json(
        service
            .list_with_application_counts(&organization_mail)
            .await?,
    ))
}

pub async fn list_expired_for_organization(
    State(service): State<Arc<OpportunityService>>,
    AppPath(organization_mail): AppPath<String>,
    AppQuery(query): AppQuery<CountQuery>,
) -> Result<Json<Vec<OpportunityResponseDto>>> {
    let n = parse_count(query.n.as_deref())?;
    Ok(Json(
        service
            .last_expired_for_organization(&organization_mail, n, Utc::now())
            .await?,
    ))
}

pub async fn list_completed_for_volunteer(
    State(service): State<Arc<OpportunityService>>,
    AppPath(volunteer_id): AppPath<String>,
    AppQuery(query): AppQuery<CountQuery>,
) -> Result<Json<Vec<OpportunityResponseDto>>> {
    let volunteer_id = parse_id("volunteer_id", &volunteer_id)?;
    let n = parse_count(query.n.as_deref())?;
    Ok(Json(
        service
            .last_completed_for_volunteer(volunteer_id, n, Utc::now())
            .await?,
    ))
}
