//! Question submission engine.
//!
//! Two independent writes: the question insert and the category tag union.
//! The union failing after a successful insert is logged and reported via
//! `tags_updated = false`; the question stays persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionCommand, QuestionReceipt,
    QuestionRepository, SubmitQuestionRequest,
};
use crate::domain::{Error, Principal, Question, text};

/// Submission engine over the category and question stores.
#[derive(Clone)]
pub struct QuestionSubmissionService {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionSubmissionService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self { categories, questions }
    }

    fn map_category_error(error: CategoryRepositoryError) -> Error {
        Error::internal(format!("category store error: {error}"))
    }
}

#[async_trait]
impl QuestionCommand for QuestionSubmissionService {
    async fn submit_question(
        &self,
        author: &Principal,
        request: SubmitQuestionRequest,
    ) -> Result<QuestionReceipt, Error> {
        let tags = text::split_csv(&request.tags_csv);

        // The category must exist before anything is written: its display
        // name is snapshotted onto the question.
        let category = self
            .categories
            .find_by_id(&request.category_id)
            .await
            .map_err(Self::map_category_error)?
            .ok_or_else(|| Error::not_found("category not found"))?;

        let question = Question::new(
            request.body,
            author.id,
            author.username.clone(),
            category.name.clone(),
        );
        self.questions
            .insert(&question)
            .await
            .map_err(|err| Error::internal(format!("question store error: {err}")))?;

        let tags_updated = if tags.is_empty() {
            true
        } else {
            match self.categories.add_tags(&request.category_id, &tags).await {
                Ok(()) => true,
                Err(err) => {
                    error!(
                        category_id = %request.category_id,
                        question_id = %question.id,
                        error = %err,
                        "tag union failed after question insert"
                    );
                    false
                }
            }
        };

        Ok(QuestionReceipt {
            question_id: question.id,
            category_name: category.name,
            tags_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockCategoryRepository, MockQuestionRepository, QuestionRepositoryError,
    };
    use crate::domain::{Category, CategoryId, ErrorCode, UserId};

    fn author() -> Principal {
        Principal {
            id: UserId::random(),
            username: "alice".to_owned(),
        }
    }

    fn category(id: CategoryId) -> Category {
        Category {
            id,
            name: "databases".to_owned(),
            tags: vec!["sql".to_owned()],
        }
    }

    fn request(category_id: CategoryId, tags_csv: &str) -> SubmitQuestionRequest {
        SubmitQuestionRequest {
            body: "How do indexes work?".to_owned(),
            tags_csv: tags_csv.to_owned(),
            category_id,
        }
    }

    fn service(
        categories: MockCategoryRepository,
        questions: MockQuestionRepository,
    ) -> QuestionSubmissionService {
        QuestionSubmissionService::new(Arc::new(categories), Arc::new(questions))
    }

    #[tokio::test]
    async fn snapshots_author_and_category_names_onto_the_question() {
        let category_id = CategoryId::random();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .times(1)
            .return_once(move |id| Ok(Some(category(*id))));
        categories
            .expect_add_tags()
            .withf(|_, tags| tags == ["indexes", "postgres"])
            .times(1)
            .returning(|_, _| Ok(()));

        let mut questions = MockQuestionRepository::new();
        questions
            .expect_insert()
            .withf(|question: &Question| {
                question.author_name == "alice" && question.category_name == "databases"
            })
            .times(1)
            .return_once(|_| Ok(()));

        let receipt = service(categories, questions)
            .submit_question(&author(), request(category_id, "indexes, postgres"))
            .await
            .expect("receipt");
        assert_eq!(receipt.category_name, "databases");
        assert!(receipt.tags_updated);
    }

    #[tokio::test]
    async fn unknown_category_fails_before_any_write() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().times(1).return_once(|_| Ok(None));
        categories.expect_add_tags().times(0);

        let mut questions = MockQuestionRepository::new();
        questions.expect_insert().times(0);

        let err = service(categories, questions)
            .submit_question(&author(), request(CategoryId::random(), "foo"))
            .await
            .expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn failed_tag_union_is_swallowed_after_the_insert() {
        let category_id = CategoryId::random();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .times(1)
            .return_once(move |id| Ok(Some(category(*id))));
        categories.expect_add_tags().times(1).return_once(|_, _| {
            Err(CategoryRepositoryError::Query {
                message: "update failed".to_owned(),
            })
        });

        let mut questions = MockQuestionRepository::new();
        questions.expect_insert().times(1).return_once(|_| Ok(()));

        let receipt = service(categories, questions)
            .submit_question(&author(), request(category_id, "foo"))
            .await
            .expect("receipt");
        assert!(!receipt.tags_updated);
    }

    #[tokio::test]
    async fn empty_tag_input_skips_the_union_entirely() {
        let category_id = CategoryId::random();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .times(1)
            .return_once(move |id| Ok(Some(category(*id))));
        categories.expect_add_tags().times(0);

        let mut questions = MockQuestionRepository::new();
        questions.expect_insert().times(1).return_once(|_| Ok(()));

        let receipt = service(categories, questions)
            .submit_question(&author(), request(category_id, " , ,"))
            .await
            .expect("receipt");
        assert!(receipt.tags_updated);
    }

    #[tokio::test]
    async fn insert_failure_is_reported_and_no_union_runs() {
        let category_id = CategoryId::random();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .times(1)
            .return_once(move |id| Ok(Some(category(*id))));
        categories.expect_add_tags().times(0);

        let mut questions = MockQuestionRepository::new();
        questions.expect_insert().times(1).return_once(|_| {
            Err(QuestionRepositoryError::Query {
                message: "write failed".to_owned(),
            })
        });

        let err = service(categories, questions)
            .submit_question(&author(), request(category_id, "foo"))
            .await
            .expect_err("error");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
