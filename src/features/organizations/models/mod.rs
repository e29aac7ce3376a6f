mod organization;

pub use organization::{NewOrganization, Organization, OrganizationPatch};
