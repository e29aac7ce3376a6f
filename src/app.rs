use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use sqlx::PgPool;

use crate::features::applications::{
    routes as applications_routes, ApplicationRepository, ApplicationService,
    PgApplicationRepository,
};
use crate::features::auth::{routes as auth_routes, AuthService};
use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService, PgCategoryRepository,
};
use crate::features::opportunities::{
    routes as opportunities_routes, OpportunityRepository, OpportunityService,
    PgOpportunityRepository,
};
use crate::features::organizations::{
    routes as organizations_routes, OrganizationRepository, OrganizationService,
    PgOrganizationRepository,
};
use crate::features::users::{
    routes as users_routes, PgUserRepository, UserRepository, UserService,
};
use crate::features::volunteers::{
    routes as volunteers_routes, PgVolunteerRepository, VolunteerRepository, VolunteerService,
};
use crate::shared::password::CredentialHasher;

/// Storage backends for every feature
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub volunteers: Arc<dyn VolunteerRepository>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub opportunities: Arc<dyn OpportunityRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            volunteers: Arc::new(PgVolunteerRepository::new(pool.clone())),
            organizations: Arc::new(PgOrganizationRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            opportunities: Arc::new(PgOpportunityRepository::new(pool.clone())),
            applications: Arc::new(PgApplicationRepository::new(pool)),
        }
    }
}

pub struct AppServices {
    pub users: Arc<UserService>,
    pub volunteers: Arc<VolunteerService>,
    pub organizations: Arc<OrganizationService>,
    pub auth: Arc<AuthService>,
    pub categories: Arc<CategoryService>,
    pub opportunities: Arc<OpportunityService>,
    pub applications: Arc<ApplicationService>,
}

impl AppServices {
    pub fn new(repositories: Repositories, hasher: CredentialHasher) -> Self {
        let auth = AuthService::new(
            Arc::clone(&repositories.volunteers),
            Arc::clone(&repositories.organizations),
            hasher.clone(),
        );

        Self {
            users: Arc::new(UserService::new(repositories.users, hasher.clone())),
            volunteers: Arc::new(VolunteerService::new(
                repositories.volunteers,
                hasher.clone(),
            )),
            organizations: Arc::new(OrganizationService::new(
                repositories.organizations,
                hasher,
            )),
            auth: Arc::new(auth),
            categories: Arc::new(CategoryService::new(repositories.categories)),
            opportunities: Arc::new(OpportunityService::new(repositories.opportunities)),
            applications: Arc::new(ApplicationService::new(repositories.applications)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Every API route plus `/health`, without the HTTP middleware stack
pub fn api_router(services: &AppServices) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(users_routes::routes(Arc::clone(&services.users)))
        .merge(volunteers_routes::routes(Arc::clone(&services.volunteers)))
        .merge(organizations_routes::routes(Arc::clone(
            &services.organizations,
        )))
        .merge(auth_routes::routes(Arc::clone(&services.auth)))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(opportunities_routes::routes(Arc::clone(
            &services.opportunities,
        )))
        .merge(applications_routes::routes(Arc::clone(
            &services.applications,
        )))
}
