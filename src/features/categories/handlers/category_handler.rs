use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, SeedCategoriesResponseDto};
use crate::features::categories::services::CategoryService;

/// Seed the default catalog (idempotent)
pub async fn seed_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<SeedCategoriesResponseDto>> {
    Ok(Json(service.seed().await?))
}

/// List all categories
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    Ok(Json(service.list().await?))
}
