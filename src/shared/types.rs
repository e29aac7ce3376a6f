use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<Vec<String>>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

/// Body returned by deletes and other operations without a resource to echo
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `?n=` query parameter of the "last N" reports.
///
/// Kept as a raw string so a missing or non-numeric value can be reported with
/// the same error shape as a non-positive one.
#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    pub n: Option<String>,
}
