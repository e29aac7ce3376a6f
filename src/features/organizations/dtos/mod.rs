mod organization_dto;

pub use organization_dto::{CreateOrganizationDto, OrganizationResponseDto, UpdateOrganizationDto};
