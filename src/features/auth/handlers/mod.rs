mod auth_handler;

pub use auth_handler::{login_organization, login_volunteer};
