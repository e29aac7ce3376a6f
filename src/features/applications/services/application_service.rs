use std::sync::Arc;

use crate::core::error::{AppError, OptionExt, Result};
use crate::features::applications::dtos::{
    ApplicationResponseDto, ApplicationWithOpportunityDto, ApplicationWithVolunteerDto,
    CreateApplicationDto, UpdateApplicationDto, VolunteerStatisticsDto,
};
use crate::features::applications::models::{
    ApplicationFilter, ApplicationPatch, NewApplication,
};
use crate::features::applications::repositories::ApplicationRepository;
use crate::shared::validation::ensure_positive_count;

/// Service for applications and the volunteer-centric reports over them
pub struct ApplicationService {
    repository: Arc<dyn ApplicationRepository>,
}

impl ApplicationService {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: CreateApplicationDto) -> Result<ApplicationResponseDto> {
        let application = self
            .repository
            .insert(NewApplication {
                volunteer_id: dto.volunteer_id,
                opportunity_id: dto.opportunity_id,
                status: dto.status,
                cover_letter: dto.cover_letter,
            })
            .await?;

        tracing::info!(
            application_id = application.id,
            volunteer_id = application.volunteer_id,
            opportunity_id = application.opportunity_id,
            "Application submitted"
        );
        Ok(application.into())
    }

    pub async fn get(&self, id: i64) -> Result<ApplicationResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .or_not_found("Application", id)
            .map(Into::into)
    }

    pub async fn update(&self, id: i64, dto: UpdateApplicationDto) -> Result<ApplicationResponseDto> {
        let status = dto.status;
        let application = self
            .repository
            .update(
                id,
                ApplicationPatch {
                    status: dto.status,
                    cover_letter: dto.cover_letter,
                },
            )
            .await?
            .or_not_found("Application", id)?;

        if let Some(status) = status {
            tracing::info!(application_id = id, status = %status, "Application status set");
        }
        Ok(application.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Application '{}' not found", id)));
        }

        tracing::info!(application_id = id, "Application withdrawn");
        Ok(())
    }

    pub async fn list(&self, filter: ApplicationFilter) -> Result<Vec<ApplicationResponseDto>> {
        let rows = self.repository.list(filter).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_volunteer_with_details(
        &self,
        volunteer_id: i64,
    ) -> Result<Vec<ApplicationWithOpportunityDto>> {
        let rows = self
            .repository
            .list_by_volunteer_with_details(volunteer_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// A nonexistent opportunity simply has no applications
    pub async fn list_by_opportunity_with_volunteer(
        &self,
        opportunity_id: i64,
    ) -> Result<Vec<ApplicationWithVolunteerDto>> {
        let rows = self
            .repository
            .list_by_opportunity_with_volunteer(opportunity_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn last_approved_for_volunteer(
        &self,
        volunteer_id: i64,
        n: i64,
    ) -> Result<Vec<ApplicationResponseDto>> {
        let n = ensure_positive_count(n)?;

        let rows = self
            .repository
            .last_approved_for_volunteer(volunteer_id, n)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn volunteer_statistics(&self, volunteer_id: i64) -> Result<VolunteerStatisticsDto> {
        let stats = self.repository.volunteer_statistics(volunteer_id).await?;
        Ok(VolunteerStatisticsDto::new(volunteer_id, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::applications::models::ApplicationStatus;
    use crate::features::opportunities::models::Opportunity;
    use crate::shared::test_helpers::MemoryStore;
    use tokio_test::assert_ok;

    struct Fixture {
        store: Arc<MemoryStore>,
        service: ApplicationService,
        volunteer_id: i64,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        store.seed_organization("org@example.org", "Helping Hands");
        let volunteer = store.seed_volunteer("vol@example.com");
        Fixture {
            service: ApplicationService::new(store.clone()),
            store,
            volunteer_id: volunteer.id,
        }
    }

    impl Fixture {
        fn opportunity(&self, hours: i32) -> Opportunity {
            self.store.seed_opportunity("org@example.org", hours, None)
        }

        async fn apply(&self, opportunity_id: i64, status: ApplicationStatus) -> ApplicationResponseDto {
            assert_ok!(
                self.service
                    .create(CreateApplicationDto {
                        volunteer_id: self.volunteer_id,
                        opportunity_id,
                        status,
                        cover_letter: "I would love to help".to_string(),
                    })
                    .await
            )
        }
    }

    #[tokio::test]
    async fn test_volunteer_without_applications_gets_empty_views() {
        let f = fixture();

        assert!(assert_ok!(f.service.list_by_volunteer_with_details(f.volunteer_id).await).is_empty());
        assert!(assert_ok!(f.service.last_approved_for_volunteer(f.volunteer_id, 5).await).is_empty());

        let stats = assert_ok!(f.service.volunteer_statistics(f.volunteer_id).await);
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.total_hours_worked, 0);
    }

    #[tokio::test]
    async fn test_statistics_count_only_accepted() {
        let f = fixture();
        let a = f.opportunity(3);
        let b = f.opportunity(5);
        let c = f.opportunity(11);

        f.apply(a.id, ApplicationStatus::Accepted).await;
        f.apply(b.id, ApplicationStatus::Accepted).await;
        f.apply(c.id, ApplicationStatus::Rejected).await;
        f.apply(c.id, ApplicationStatus::Pending).await;

        let stats = assert_ok!(f.service.volunteer_statistics(f.volunteer_id).await);
        assert_eq!(stats.total_jobs, 2);
        assert_eq!(stats.total_hours_worked, 8);
    }

    #[tokio::test]
    async fn test_accepting_raises_statistics_by_one_job() {
        let f = fixture();
        let opportunity = f.opportunity(6);
        let application = f.apply(opportunity.id, ApplicationStatus::Pending).await;

        let before = assert_ok!(f.service.volunteer_statistics(f.volunteer_id).await);

        let updated = assert_ok!(
            f.service
                .update(
                    application.id,
                    UpdateApplicationDto {
                        status: Some(ApplicationStatus::Accepted),
                        ..Default::default()
                    },
                )
                .await
        );
        assert_eq!(updated.status, ApplicationStatus::Accepted);
        assert_eq!(updated.cover_letter, application.cover_letter);

        let after = assert_ok!(f.service.volunteer_statistics(f.volunteer_id).await);
        assert_eq!(after.total_jobs, before.total_jobs + 1);
        assert_eq!(
            after.total_hours_worked,
            before.total_hours_worked + i64::from(opportunity.hours_required)
        );
    }

    #[tokio::test]
    async fn test_enriched_by_volunteer() {
        let f = fixture();
        let opportunity = f.opportunity(2);
        f.apply(opportunity.id, ApplicationStatus::Pending).await;

        let rows = assert_ok!(f.service.list_by_volunteer_with_details(f.volunteer_id).await);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].opportunity_title, opportunity.title);
        assert_eq!(rows[0].organization_name, "Helping Hands");
    }

    #[tokio::test]
    async fn test_enriched_by_opportunity() {
        let f = fixture();
        let opportunity = f.opportunity(2);
        f.apply(opportunity.id, ApplicationStatus::Pending).await;

        let rows = assert_ok!(f.service.list_by_opportunity_with_volunteer(opportunity.id).await);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].volunteer_email, "vol@example.com");

        assert!(assert_ok!(f.service.list_by_opportunity_with_volunteer(9_999).await).is_empty());
    }

    #[tokio::test]
    async fn test_last_approved_is_limited_newest_first() {
        let f = fixture();
        let mut accepted = Vec::new();
        for hours in [1, 2, 3] {
            let opportunity = f.opportunity(hours);
            accepted.push(f.apply(opportunity.id, ApplicationStatus::Accepted).await.id);
        }
        let other = f.opportunity(4);
        f.apply(other.id, ApplicationStatus::Pending).await;

        let approved = assert_ok!(f.service.last_approved_for_volunteer(f.volunteer_id, 2).await);
        let ids: Vec<i64> = approved.iter().map(|a| a.id).collect();

        assert_eq!(ids, vec![accepted[2], accepted[1]]);
        assert!(matches!(
            f.service.last_approved_for_volunteer(f.volunteer_id, 0).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let f = fixture();
        let first = f.opportunity(1);
        let second = f.opportunity(1);
        let other_volunteer = f.store.seed_volunteer("other@example.com");

        f.apply(first.id, ApplicationStatus::Pending).await;
        f.apply(second.id, ApplicationStatus::Accepted).await;
        f.store
            .seed_application(other_volunteer.id, first.id, ApplicationStatus::Pending);

        let all = assert_ok!(f.service.list(ApplicationFilter::default()).await);
        assert_eq!(all.len(), 3);

        let mine_pending = assert_ok!(
            f.service
                .list(ApplicationFilter {
                    volunteer_id: Some(f.volunteer_id),
                    status: Some(ApplicationStatus::Pending),
                    ..Default::default()
                })
                .await
        );
        assert_eq!(mine_pending.len(), 1);
        assert_eq!(mine_pending[0].opportunity_id, first.id);

        let on_first = assert_ok!(
            f.service
                .list(ApplicationFilter {
                    opportunity_id: Some(first.id),
                    ..Default::default()
                })
                .await
        );
        assert_eq!(on_first.len(), 2);
    }

    #[tokio::test]
    async fn test_create_requires_existing_references() {
        let f = fixture();
        let err = f
            .service
            .create(CreateApplicationDto {
                volunteer_id: f.volunteer_id,
                opportunity_id: 9_999,
                status: ApplicationStatus::Pending,
                cover_letter: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Referenced record does not exist"));
    }

    #[tokio::test]
    async fn test_deleting_volunteer_removes_applications() {
        let f = fixture();
        let opportunity = f.opportunity(1);
        let application = f.apply(opportunity.id, ApplicationStatus::Pending).await;

        f.store.remove_volunteer("vol@example.com");

        assert!(matches!(
            f.service.get(application.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_application() {
        let f = fixture();
        assert!(matches!(f.service.get(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            f.service.update(1, UpdateApplicationDto::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(f.service.delete(1).await, Err(AppError::NotFound(_))));
    }
}
