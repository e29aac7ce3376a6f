mod application_dto;

pub use application_dto::{
    ApplicationListQuery, ApplicationResponseDto, ApplicationWithOpportunityDto,
    ApplicationWithVolunteerDto, CreateApplicationDto, UpdateApplicationDto,
    VolunteerStatisticsDto,
};
