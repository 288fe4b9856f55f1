//! Category record with its monotonically growing tag set.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable category identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(Uuid);

/// Validation error for [`CategoryId`] parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("category id must be a valid UUID")]
pub struct InvalidCategoryId;

impl CategoryId {
    /// Validate and construct a [`CategoryId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidCategoryId> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| InvalidCategoryId)
    }

    /// Generate a new random [`CategoryId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for CategoryId {
    type Error = InvalidCategoryId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted category.
///
/// ## Invariants
/// - `name` is immutable here; categories are created by an admin path
///   outside this core.
/// - `tags` holds no duplicates and only ever grows, via [`Category::union_tags`].
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub tags: Vec<String>,
}

impl Category {
    /// Build a category with no tags yet.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Add each tag that is not already present, preserving insertion order.
    ///
    /// Re-adding existing tags is a no-op, so the operation is idempotent.
    pub fn union_tags(&mut self, tags: &[String]) {
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }
}
