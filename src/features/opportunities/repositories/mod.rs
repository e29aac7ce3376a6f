mod opportunity_repository;

pub use opportunity_repository::{OpportunityRepository, PgOpportunityRepository};
