//! Profile mutation handler.
//!
//! ```text
//! POST /api/v1/profile {"username":"new-name","skills":"rust, sql","interests":["hiking"]}
//! ```
//!
//! Every field is optional and applied independently. The handler always
//! answers with a redirect to the profile view; per-field failures are
//! logged by the engine and deliberately not surfaced here.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::{AvatarUpload, ProfileChanges};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, see_other};

/// Avatar upload descriptor as handed over by the file intake boundary.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadRequest {
    pub original_name: String,
    pub stored_filename: String,
    pub media_type: String,
}

impl From<AvatarUploadRequest> for AvatarUpload {
    fn from(value: AvatarUploadRequest) -> Self {
        Self {
            original_name: value.original_name,
            stored_filename: value.stored_filename,
            media_type: value.media_type,
        }
    }
}

/// Interests arrive as a single string or a list, depending on how many
/// checkboxes the form sent.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(single) => vec![single],
            OneOrMany::Many(many) => many,
        }
    }
}

/// Profile update body for `POST /api/v1/profile`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub avatar: Option<AvatarUploadRequest>,
    pub username: Option<String>,
    /// Comma-separated; replaces the whole list.
    pub skills: Option<String>,
    pub interests: Option<OneOrMany>,
    pub remove_interest: Option<String>,
    pub remove_skill: Option<String>,
}

impl From<ProfileUpdateRequest> for ProfileChanges {
    fn from(value: ProfileUpdateRequest) -> Self {
        Self {
            avatar: value.avatar.map(Into::into),
            username: value.username,
            skills: value.skills,
            interests: value.interests.map(Into::into),
            remove_interest: value.remove_interest,
            remove_skill: value.remove_skill,
        }
    }
}

/// Apply a batch of partial profile updates.
#[utoipa::path(
    post,
    path = "/api/v1/profile",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 303, description = "Applied best-effort; redirect to /profile"),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[post("/profile")]
pub async fn update_profile(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<ProfileUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_principal()?;
    let report = state
        .profile
        .update_profile(&principal.id, payload.into_inner().into())
        .await;
    // The page flow succeeds regardless of what the report says; failures
    // were already logged by the engine.
    debug!(
        user_id = %principal.id,
        applied = report.applied.len(),
        failed = report.failures.len(),
        avatar_rejected = report.avatar_rejected,
        "profile update handled"
    );
    Ok(see_other("/profile"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::{MockProfileCommand, ProfileField, ProfileUpdateReport};
    use crate::inbound::http::users::{LoginRequest, login};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::json;
    use std::sync::Arc;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(web::scope("/api/v1").service(login).service(update_profile))
    }

    async fn session_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(LoginRequest {
                    email: "dev@example.com".to_owned(),
                    password: "password".to_owned(),
                })
                .to_request(),
        )
        .await;
        res.response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[actix_web::test]
    async fn rejects_without_a_session_before_the_engine_runs() {
        let mut profile = MockProfileCommand::new();
        profile.expect_update_profile().times(0);
        let state = HttpState {
            profile: Arc::new(profile),
            ..HttpState::fixture()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/profile")
                .set_json(json!({ "username": "new-name" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn forwards_the_changes_and_redirects_to_profile() {
        let mut profile = MockProfileCommand::new();
        profile
            .expect_update_profile()
            .withf(|_: &UserId, changes: &ProfileChanges| {
                changes.username.as_deref() == Some("new-name")
                    && changes.skills.as_deref() == Some("rust, sql")
                    && changes.interests.as_deref() == Some(["hiking".to_owned()].as_slice())
                    && changes.avatar.is_none()
            })
            .times(1)
            .return_once(|_, _| ProfileUpdateReport {
                applied: vec![
                    ProfileField::Username,
                    ProfileField::Skills,
                    ProfileField::Interests,
                ],
                ..ProfileUpdateReport::default()
            });
        let state = HttpState {
            profile: Arc::new(profile),
            ..HttpState::fixture()
        };
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = session_cookie(&app).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/profile")
                .cookie(cookie)
                .set_json(json!({
                    "username": "new-name",
                    "skills": "rust, sql",
                    "interests": ["hiking"],
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get("Location").and_then(|v| v.to_str().ok()),
            Some("/profile")
        );
    }

    #[actix_web::test]
    async fn a_single_interest_string_becomes_a_one_element_list() {
        let mut profile = MockProfileCommand::new();
        profile
            .expect_update_profile()
            .withf(|_, changes: &ProfileChanges| {
                changes.interests.as_deref() == Some(["hiking".to_owned()].as_slice())
            })
            .times(1)
            .return_once(|_, _| ProfileUpdateReport::default());
        let state = HttpState {
            profile: Arc::new(profile),
            ..HttpState::fixture()
        };
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = session_cookie(&app).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/profile")
                .cookie(cookie)
                .set_json(json!({ "interests": "hiking" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn per_field_failures_still_redirect() {
        let mut profile = MockProfileCommand::new();
        profile
            .expect_update_profile()
            .times(1)
            .return_once(|_, _| ProfileUpdateReport {
                failures: vec![crate::domain::ports::FieldFailure {
                    field: ProfileField::Username,
                    message: "update failed".to_owned(),
                }],
                ..ProfileUpdateReport::default()
            });
        let state = HttpState {
            profile: Arc::new(profile),
            ..HttpState::fixture()
        };
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = session_cookie(&app).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/profile")
                .cookie(cookie)
                .set_json(json!({ "username": "new-name" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }
}
