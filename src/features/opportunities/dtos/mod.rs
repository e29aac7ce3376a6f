mod opportunity_dto;

pub use opportunity_dto::{
    AvailableOpportunityDto, CreateOpportunityDto, OpportunityResponseDto,
    OpportunityWithCountDto, OrganizationOpportunitiesQuery, UpdateOpportunityDto,
};
