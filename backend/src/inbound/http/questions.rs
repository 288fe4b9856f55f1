//! Question and category handlers.
//!
//! ```text
//! POST /api/v1/questions {"body":"How do indexes work?","tags":"indexes, postgres","categoryId":"..."}
//! GET  /api/v1/questions
//! GET  /api/v1/categories
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SubmitQuestionRequest;
use crate::domain::{Category, CategoryId, Error, Question, QuestionId, UserId};
use crate::inbound::http::session::{FlashKind, SessionContext};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, see_other};

/// Submission body for `POST /api/v1/questions`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuestionBody {
    #[serde(default)]
    pub body: String,
    /// Comma-separated tags to union into the category.
    #[serde(default)]
    pub tags: String,
    pub category_id: String,
}

/// Question view for list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    #[schema(value_type = String, format = Uuid)]
    pub id: QuestionId,
    pub body: String,
    #[schema(value_type = String, format = Uuid)]
    pub author_id: UserId,
    pub author_name: String,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            body: question.body,
            author_id: question.author_id,
            author_name: question.author_name,
            category_name: question.category_name,
            created_at: question.created_at,
        }
    }
}

/// Category view for list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    #[schema(value_type = String, format = Uuid)]
    pub id: CategoryId,
    pub name: String,
    pub tags: Vec<String>,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            tags: category.tags,
        }
    }
}

/// Submit a question into a category.
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    request_body = SubmitQuestionBody,
    responses(
        (status = 303, description = "Posted; redirect to /"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Category not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "submitQuestion"
)]
#[post("/questions")]
pub async fn submit_question(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SubmitQuestionBody>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_principal()?;
    let payload = payload.into_inner();
    let category_id = CategoryId::new(&payload.category_id)
        .map_err(|_| Error::invalid_request("categoryId must be a valid UUID"))?;
    state
        .questions
        .submit_question(
            &principal,
            SubmitQuestionRequest {
                body: payload.body,
                tags_csv: payload.tags,
                category_id,
            },
        )
        .await?;
    session.push_flash(FlashKind::Success, "Your question was posted successfully");
    Ok(see_other("/"))
}

/// List questions, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    responses(
        (status = 200, description = "Questions", body = [QuestionView]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "listQuestions",
    security([])
)]
#[get("/questions")]
pub async fn list_questions(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<QuestionView>>> {
    let questions = state
        .question_store
        .list()
        .await
        .map_err(|err| Error::internal(format!("question store error: {err}")))?;
    Ok(web::Json(questions.into_iter().map(Into::into).collect()))
}

/// List categories with their tag sets.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories", body = [CategoryView]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "listCategories",
    security([])
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CategoryView>>> {
    let categories = state
        .categories
        .list()
        .await
        .map_err(|err| Error::internal(format!("category store error: {err}")))?;
    Ok(web::Json(categories.into_iter().map(Into::into).collect()))
}
