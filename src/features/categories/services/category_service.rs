use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, SeedCategoriesResponseDto};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::constants::DEFAULT_CATEGORIES;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Insert the default catalog. Safe to run any number of times.
    pub async fn seed(&self) -> Result<SeedCategoriesResponseDto> {
        let names: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();

        let inserted = self.repository.insert_missing(&names).await?;
        let total = self.repository.list().await?.len();

        tracing::info!(inserted, total, "Category catalog seeded");
        Ok(SeedCategoriesResponseDto {
            message: "Categories seeded successfully".to_string(),
            inserted,
            total,
        })
    }

    /// List the catalog in insertion order
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::MemoryStore;
    use tokio_test::assert_ok;

    fn names(categories: &[CategoryResponseDto]) -> Vec<String> {
        categories.iter().map(|c| c.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_seed_twice_equals_seed_once() {
        let store = Arc::new(MemoryStore::new());
        let service = CategoryService::new(store.clone());

        let first = assert_ok!(service.seed().await);
        let after_first = assert_ok!(service.list().await);

        let second = assert_ok!(service.seed().await);
        let after_second = assert_ok!(service.list().await);

        assert_eq!(first.inserted, DEFAULT_CATEGORIES.len() as u64);
        assert_eq!(second.inserted, 0);
        assert_eq!(first.total, second.total);
        assert_eq!(names(&after_first), names(&after_second));
        assert_eq!(
            after_first.iter().map(|c| c.id).collect::<Vec<_>>(),
            after_second.iter().map(|c| c.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_seed_leaves_existing_rows_untouched() {
        let store = Arc::new(MemoryStore::new());
        store.insert_category("Teaching");
        let existing = store.category("Teaching").unwrap();

        let service = CategoryService::new(store.clone());
        let outcome = assert_ok!(service.seed().await);

        assert_eq!(outcome.inserted, DEFAULT_CATEGORIES.len() as u64 - 1);
        assert_eq!(outcome.total, DEFAULT_CATEGORIES.len());

        let after = store.category("Teaching").unwrap();
        assert_eq!(after.id, existing.id);
        assert_eq!(after.created_at, existing.created_at);
    }

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let store = Arc::new(MemoryStore::new());
        let service = CategoryService::new(store);
        assert!(assert_ok!(service.list().await).is_empty());
    }
}
