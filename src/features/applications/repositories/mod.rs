mod application_repository;

pub use application_repository::{ApplicationRepository, PgApplicationRepository};
