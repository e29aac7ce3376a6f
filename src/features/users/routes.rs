use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users/create", post(handlers::create_user))
        .route("/users/get/{email}", get(handlers::get_user))
        .route("/users/update/{email}", put(handlers::update_user))
        .route("/users/delete/{email}", delete(handlers::delete_user))
        .with_state(service)
}
