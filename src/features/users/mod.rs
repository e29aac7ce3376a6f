//! Platform user accounts, keyed by email.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/users/create` | Create a user (password is hashed) |
//! | GET | `/users/get/{email}` | Fetch a user |
//! | PUT | `/users/update/{email}` | Patch a user |
//! | DELETE | `/users/delete/{email}` | Delete a user |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgUserRepository, UserRepository};
pub use services::UserService;
