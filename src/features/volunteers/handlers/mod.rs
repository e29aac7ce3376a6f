mod volunteer_handler;

pub use volunteer_handler::{create_volunteer, delete_volunteer, get_volunteer, update_volunteer};
