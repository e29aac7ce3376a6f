mod opportunity;

pub use opportunity::{
    NewOpportunity, Opportunity, OpportunityPatch, OpportunityWithApplicationCount,
    OpportunityWithOrganization,
};
