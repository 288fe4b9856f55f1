//! Driven port for question persistence.

use async_trait::async_trait;

use crate::domain::Question;

/// Errors raised by question repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionRepositoryError {
    /// Store connection could not be established.
    #[error("question store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("question store query failed: {message}")]
    Query { message: String },
}

/// Port for question storage. Questions are immutable once inserted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a new question.
    async fn insert(&self, question: &Question) -> Result<(), QuestionRepositoryError>;

    /// List all questions, newest first.
    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise question storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionRepository;

#[async_trait]
impl QuestionRepository for FixtureQuestionRepository {
    async fn insert(&self, _question: &Question) -> Result<(), QuestionRepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(Vec::new())
    }
}
