mod application_handler;

pub use application_handler::{
    create_application, delete_application, get_application, get_volunteer_statistics,
    list_applications, list_applications_for_opportunity, list_applications_for_volunteer,
    list_approved_for_volunteer, update_application,
};
