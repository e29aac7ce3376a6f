pub mod applications;
pub mod auth;
pub mod categories;
pub mod opportunities;
pub mod organizations;
pub mod users;
pub mod volunteers;
