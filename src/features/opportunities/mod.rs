//! Volunteer opportunities posted by organizations, and the reports over them.
//!
//! An opportunity is *available* while `end_date >= now` and *expired* once
//! `end_date < now`. Neither state is stored. Opportunities without an end
//! date are in neither list.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/opportunities/create` | Create an opportunity |
//! | GET | `/opportunities/get/{id}` | Fetch an opportunity |
//! | PUT | `/opportunities/update/{id}` | Patch an opportunity |
//! | DELETE | `/opportunities/delete/{id}` | Delete an opportunity |
//! | GET | `/opportunities/available` | Available opportunities with organization name |
//! | GET | `/opportunities?organization_mail=` | Organization's opportunities with application counts |
//! | GET | `/opportunities/organization/{organization_mail}/expired?n=` | Last N expired |
//! | GET | `/opportunities/volunteer/{volunteer_id}/accepted-expired?n=` | Last N completed by a volunteer |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{OpportunityRepository, PgOpportunityRepository};
pub use services::OpportunityService;
