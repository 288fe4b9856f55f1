//! Driving port for question submission.

use async_trait::async_trait;

use crate::domain::{CategoryId, Error, Principal, QuestionId};

/// Raw question submission input.
#[derive(Debug, Clone)]
pub struct SubmitQuestionRequest {
    pub body: String,
    pub tags_csv: String,
    pub category_id: CategoryId,
}

/// Accepted submission.
///
/// `tags_updated` is `false` when the follow-up tag union failed and was
/// swallowed; the question itself is already persisted at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReceipt {
    pub question_id: QuestionId,
    pub category_name: String,
    pub tags_updated: bool,
}

/// Domain use-case port for submitting a question.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Create the question and union its tags into the category.
    ///
    /// Fails with a `not_found` error when the category does not exist;
    /// no question is created in that case.
    async fn submit_question(
        &self,
        author: &Principal,
        request: SubmitQuestionRequest,
    ) -> Result<QuestionReceipt, Error>;
}

/// Fixture implementation accepting every submission without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionCommand;

#[async_trait]
impl QuestionCommand for FixtureQuestionCommand {
    async fn submit_question(
        &self,
        _author: &Principal,
        _request: SubmitQuestionRequest,
    ) -> Result<QuestionReceipt, Error> {
        Ok(QuestionReceipt {
            question_id: QuestionId::random(),
            category_name: "general".to_owned(),
            tags_updated: true,
        })
    }
}
