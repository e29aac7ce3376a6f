//! Volunteer profiles.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/volunteers/create` | Register a volunteer |
//! | GET | `/volunteers/get/{email}` | Fetch a volunteer |
//! | PUT | `/volunteers/update/{email}` | Patch a volunteer |
//! | DELETE | `/volunteers/delete/{email}` | Delete a volunteer and their applications |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgVolunteerRepository, VolunteerRepository};
pub use services::VolunteerService;
