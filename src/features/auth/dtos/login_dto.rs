use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for volunteer and organization login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login: the authenticated account, without its password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseDto<T> {
    pub user: T,
}
