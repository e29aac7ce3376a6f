//! Applications of volunteers to opportunities, and the volunteer reports
//! derived from them.
//!
//! Only `accepted` applications count towards a volunteer's statistics and
//! approved history.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/applications` | Submit an application |
//! | GET | `/applications?volunteer_id=&opportunity_id=&status=` | Filtered list |
//! | GET | `/applications/{id}` | Fetch an application |
//! | PUT | `/applications/{id}` | Change status or cover letter |
//! | DELETE | `/applications/{id}` | Withdraw an application |
//! | GET | `/applications/volunteer/{volunteer_id}` | With opportunity title and organization name |
//! | GET | `/applications/volunteer/{volunteer_id}/approved?n=` | Last N accepted |
//! | GET | `/opportunities/{opportunity_id}/applications` | With volunteer name and email |
//! | GET | `/volunteers/{volunteer_id}/statistics` | Total jobs and hours worked |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{ApplicationRepository, PgApplicationRepository};
pub use services::ApplicationService;
