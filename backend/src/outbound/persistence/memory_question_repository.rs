//! In-memory question store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Question;
use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};

/// Vec-backed question repository; questions are append-only.
#[derive(Debug, Default)]
pub struct MemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl MemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestionRepository {
    async fn insert(&self, question: &Question) -> Result<(), QuestionRepositoryError> {
        self.questions.write().await.push(question.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut all = self.questions.read().await.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
