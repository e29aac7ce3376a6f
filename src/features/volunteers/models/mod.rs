mod volunteer;

pub use volunteer::{NewVolunteer, Volunteer, VolunteerPatch};
