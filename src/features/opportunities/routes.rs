use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::opportunities::handlers;
use crate::features::opportunities::services::OpportunityService;

/// Create routes for the opportunities feature
///
/// Note: `/opportunities/{opportunity_id}/applications` is served by the applications feature
pub fn routes(service: Arc<OpportunityService>) -> Router {
    Router::new()
        .route(
            "/opportunities",
            get(handlers::list_organization_opportunities),
        )
        .route("/opportunities/create", post(handlers::create_opportunity))
        .route("/opportunities/get/{id}", get(handlers::get_opportunity))
        .route("/opportunities/update/{id}", put(handlers::update_opportunity))
        .route(
            "/opportunities/delete/{id}",
            delete(handlers::delete_opportunity),
        )
        .route(
            "/opportunities/available",
            get(handlers::list_available_opportunities),
        )
        .route(
            "/opportunities/organization/{organization_mail}/expired",
            get(handlers::list_expired_for_organization),
        )
        .route(
            "/opportunities/volunteer/{volunteer_id}/accepted-expired",
            get(handlers::list_completed_for_volunteer),
        )
        .with_state(service)
}
