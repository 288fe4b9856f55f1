//! In-memory category store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

/// Map-backed category repository.
#[derive(Debug, Default)]
pub struct MemoryCategoryRepository {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-seeded with empty categories of the given
    /// names. Used by the bootstrap path; ids are assigned here.
    pub fn with_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: HashMap<CategoryId, Category> = names
            .into_iter()
            .map(|name| {
                let category = Category::new(CategoryId::random(), name);
                (category.id, category)
            })
            .collect();
        Self {
            categories: RwLock::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut all: Vec<Category> = self.categories.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError> {
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(())
    }

    async fn add_tags(
        &self,
        id: &CategoryId,
        tags: &[String],
    ) -> Result<(), CategoryRepositoryError> {
        let mut categories = self.categories.write().await;
        let category = categories
            .get_mut(id)
            .ok_or_else(|| CategoryRepositoryError::Query {
                message: format!("no category with id {id}"),
            })?;
        category.union_tags(tags);
        Ok(())
    }
}
