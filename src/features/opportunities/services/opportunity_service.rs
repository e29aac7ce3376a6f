use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, OptionExt, Result};
use crate::features::opportunities::dtos::{
    AvailableOpportunityDto, CreateOpportunityDto, OpportunityResponseDto,
    OpportunityWithCountDto, UpdateOpportunityDto,
};
use crate::features::opportunities::models::{NewOpportunity, OpportunityPatch};
use crate::features::opportunities::repositories::OpportunityRepository;
use crate::shared::validation::ensure_positive_count;

/// Service for opportunities and the reports built on them.
///
/// Expiry is derived from `end_date` against the `now` handed in by the caller.
pub struct OpportunityService {
    repository: Arc<dyn OpportunityRepository>,
}

impl OpportunityService {
    pub fn new(repository: Arc<dyn OpportunityRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: CreateOpportunityDto) -> Result<OpportunityResponseDto> {
        ensure_date_order(dto.start_date, dto.end_date)?;

        let opportunity = self
            .repository
            .insert(NewOpportunity {
                organization_mail: dto.organization_mail,
                category: dto.category,
                title: dto.title,
                description: dto.description,
                location: dto.location,
                hours_required: dto.hours_required,
                start_date: dto.start_date,
                end_date: dto.end_date,
            })
            .await?;

        tracing::info!(
            opportunity_id = opportunity.id,
            organization = %opportunity.organization_mail,
            "Opportunity created"
        );
        Ok(opportunity.into())
    }

    pub async fn get(&self, id: i64) -> Result<OpportunityResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .or_not_found("Opportunity", id)
            .map(Into::into)
    }

    pub async fn update(&self, id: i64, dto: UpdateOpportunityDto) -> Result<OpportunityResponseDto> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .or_not_found("Opportunity", id)?;

        // Check the window the row will have after the patch
        ensure_date_order(
            dto.start_date.or(current.start_date),
            dto.end_date.or(current.end_date),
        )?;

        let patch = OpportunityPatch {
            category: dto.category,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            hours_required: dto.hours_required,
            start_date: dto.start_date,
            end_date: dto.end_date,
        };

        self.repository
            .update(id, patch)
            .await?
            .or_not_found("Opportunity", id)
            .map(Into::into)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Opportunity '{}' not found", id)));
        }

        tracing::info!(opportunity_id = id, "Opportunity deleted");
        Ok(())
    }

    pub async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<AvailableOpportunityDto>> {
        let rows = self.repository.list_available(now).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn last_expired_for_organization(
        &self,
        organization_mail: &str,
        n: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<OpportunityResponseDto>> {
        let organization_mail = require_organization(organization_mail)?;
        let n = ensure_positive_count(n)?;

        let rows = self
            .repository
            .last_expired_for_organization(organization_mail, n, now)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_with_application_counts(
        &self,
        organization_mail: &str,
    ) -> Result<Vec<OpportunityWithCountDto>> {
        let organization_mail = require_organization(organization_mail)?;

        let rows = self
            .repository
            .list_with_application_counts(organization_mail)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Last `n` opportunities the volunteer was accepted for and that have ended
    pub async fn last_completed_for_volunteer(
        &self,
        volunteer_id: i64,
        n: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<OpportunityResponseDto>> {
        let n = ensure_positive_count(n)?;

        let rows = self
            .repository
            .last_completed_for_volunteer(volunteer_id, n, now)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn ensure_date_order(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(AppError::BadRequest(
            "start_date must not be after end_date".to_string(),
        )),
        _ => Ok(()),
    }
}

/// The email is an opaque key: blank is rejected, anything else is matched as given
fn require_organization(organization_mail: &str) -> Result<&str> {
    if organization_mail.trim().is_empty() {
        return Err(AppError::BadRequest(
            "organization_mail is required".to_string(),
        ));
    }
    Ok(organization_mail)
}
