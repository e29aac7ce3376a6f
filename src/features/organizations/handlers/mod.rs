mod organization_handler;

pub use organization_handler::{
    create_organization, delete_organization, get_organization, update_organization,
};
