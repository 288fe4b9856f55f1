//! Question record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Stable question identifier assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(Uuid);

/// Validation error for [`QuestionId`] parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("question id must be a valid UUID")]
pub struct InvalidQuestionId;

impl QuestionId {
    /// Generate a new random [`QuestionId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<QuestionId> for String {
    fn from(value: QuestionId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for QuestionId {
    type Error = InvalidQuestionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uuid::parse_str(&value)
            .map(Self)
            .map_err(|_| InvalidQuestionId)
    }
}

/// Persisted question, immutable after creation.
///
/// `author_name` and `category_name` are denormalized snapshots taken when
/// the question is submitted; later changes to the source records do not
/// propagate back here.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub body: String,
    pub author_id: UserId,
    pub author_name: String,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a new question, capturing the author and category snapshots.
    pub fn new(
        body: impl Into<String>,
        author_id: UserId,
        author_name: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId::random(),
            body: body.into(),
            author_id,
            author_name: author_name.into(),
            category_name: category_name.into(),
            created_at: Utc::now(),
        }
    }
}
