//! Password login for volunteers and organizations.
//!
//! Both endpoints answer 401 `"Invalid email or password"` for any failure,
//! so a caller cannot probe which emails are registered.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AuthService;
