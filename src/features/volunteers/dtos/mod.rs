mod volunteer_dto;

pub use volunteer_dto::{CreateVolunteerDto, UpdateVolunteerDto, VolunteerResponseDto};
