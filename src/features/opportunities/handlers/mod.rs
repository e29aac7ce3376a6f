mod opportunity_handler;

pub use opportunity_handler::{
    create_opportunity, delete_opportunity, get_opportunity, list_available_opportunities,
    list_completed_for_volunteer, list_expired_for_organization, list_organization_opportunities,
    update_opportunity,
};
