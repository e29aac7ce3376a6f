use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Create routes for the auth feature
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/login/volunteer", post(handlers::login_volunteer))
        .route("/login/organization", post(handlers::login_organization))
        .with_state(service)
}
