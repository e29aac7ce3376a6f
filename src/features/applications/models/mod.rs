mod application;

pub use application::{
    Application, ApplicationFilter, ApplicationPatch, ApplicationStatus,
    ApplicationWithOpportunity, ApplicationWithVolunteer, NewApplication, VolunteerStatistics,
};
