use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::organizations::handlers;
use crate::features::organizations::services::OrganizationService;

/// Create routes for the organizations feature
pub fn routes(service: Arc<OrganizationService>) -> Router {
    Router::new()
        .route("/organizations/create", post(handlers::create_organization))
        .route("/organizations/get/{email}", get(handlers::get_organization))
        .route(
            "/organizations/update/{email}",
            put(handlers::update_organization),
        )
        .route(
            "/organizations/delete/{email}",
            delete(handlers::delete_organization),
        )
        .with_state(service)
}
