use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;

/// Create routes for the applications feature, including the
/// application-backed views mounted under `/opportunities` and `/volunteers`
pub fn routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route(
            "/applications",
            get(handlers::list_applications).post(handlers::create_application),
        )
        .route(
            "/applications/{id}",
            get(handlers::get_application)
                .put(handlers::update_application)
                .delete(handlers::delete_application),
        )
        .route(
            "/applications/volunteer/{volunteer_id}",
            get(handlers::list_applications_for_volunteer),
        )
        .route(
            "/applications/volunteer/{volunteer_id}/approved",
            get(handlers::list_approved_for_volunteer),
        )
        .route(
            "/opportunities/{opportunity_id}/applications",
            get(handlers::list_applications_for_opportunity),
        )
        .route(
            "/volunteers/{volunteer_id}/statistics",
            get(handlers::get_volunteer_statistics),
        )
        .with_state(service)
}
