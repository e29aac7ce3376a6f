//! Organization profiles. Organizations own opportunities through their email.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{OrganizationRepository, PgOrganizationRepository};
pub use services::OrganizationService;
