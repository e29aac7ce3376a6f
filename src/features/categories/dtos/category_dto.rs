use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
        }
    }
}

/// Outcome of a seed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategoriesResponseDto {
    pub message: String,
    /// Rows added by this run; zero once the catalog is complete
    pub inserted: u64,
    /// Size of the catalog after the run
    pub total: usize,
}
