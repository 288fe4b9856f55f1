//! Driven port for category persistence.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

/// Errors raised by category repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRepositoryError {
    /// Store connection could not be established.
    #[error("category store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("category store query failed: {message}")]
    Query { message: String },
}

/// Port for category lookup and tag growth.
///
/// Category names are immutable here; the only mutation is the idempotent
/// tag set-union. `insert` exists for the out-of-scope admin/seed path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch a category by id. Returns `None` when no record matches.
    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError>;

    /// List all categories.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Insert a category (seeding/admin path).
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError>;

    /// Set-union the given tags into the category's tag set.
    ///
    /// Re-submitting tags that are already present is a no-op.
    async fn add_tags(
        &self,
        id: &CategoryId,
        tags: &[String],
    ) -> Result<(), CategoryRepositoryError>;
}

/// Fixture implementation for tests that do not exercise category storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn find_by_id(
        &self,
        _id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _category: &Category) -> Result<(), CategoryRepositoryError> {
        Ok(())
    }

    async fn add_tags(
        &self,
        _id: &CategoryId,
        _tags: &[String],
    ) -> Result<(), CategoryRepositoryError> {
        Ok(())
    }
}
