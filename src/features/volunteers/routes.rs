use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::volunteers::handlers;
use crate::features::volunteers::services::VolunteerService;

/// Create routes for the volunteers feature
///
/// Note: `/volunteers/{volunteer_id}/statistics` is served by the applications feature
pub fn routes(service: Arc<VolunteerService>) -> Router {
    Router::new()
        .route("/volunteers/create", post(handlers::create_volunteer))
        .route("/volunteers/get/{email}", get(handlers::get_volunteer))
        .route("/volunteers/update/{email}", put(handlers::update_volunteer))
        .route("/volunteers/delete/{email}", delete(handlers::delete_volunteer))
        .with_state(service)
}
