//! Account handlers: registration, login, logout, session, own profile.
//!
//! ```text
//! POST /api/v1/register {"username":"alice","email":"a@x.com","password":"secret1","confirmPassword":"secret1"}
//! POST /api/v1/login    {"email":"a@x.com","password":"secret1"}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! GET  /api/v1/users/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{RegistrationOutcome, RegistrationRequest};
use crate::domain::{Error, LoginCredentials, LoginValidationError, Principal, User};
use crate::inbound::http::session::{FlashKind, FlashMessage, SessionContext};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, see_other};

/// Registration request body for `POST /api/v1/register`.
///
/// Fields default to empty strings so that absent fields flow into the
/// accumulated validation rather than failing deserialization.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(value: RegisterRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
            password: value.password,
            confirm_password: value.confirm_password,
        }
    }
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Current-session view for `GET /api/v1/session`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Principal>,
    pub flash: Vec<FlashMessage>,
}

/// Own-profile view for `GET /api/v1/users/me`. Never carries the hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[schema(value_type = String, format = Uuid)]
    pub id: crate::domain::UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.into(),
            avatar: user.avatar,
            skills: user.skills,
            interests: user.interests,
            created_at: user.created_at,
        }
    }
}

/// Register a new account.
///
/// Already-authenticated sessions are redirected home without touching the
/// registration service. Validation failures come back as one 400 payload
/// carrying every applicable issue plus the echoed username and email.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 303, description = "Registered; redirect to /login"),
        (status = 400, description = "Validation issues", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    if session.principal()?.is_some() {
        return Ok(see_other("/"));
    }

    match state
        .registration
        .register(payload.into_inner().into())
        .await?
    {
        RegistrationOutcome::Registered(_receipt) => {
            session.push_flash(FlashKind::Success, "You are now registered and can log in.");
            Ok(see_other("/login"))
        }
        RegistrationOutcome::Rejected(rejection) => {
            let errors: Vec<_> = rejection
                .issues
                .iter()
                .map(|issue| json!({ "code": issue, "message": issue.to_string() }))
                .collect();
            Err(Error::invalid_request("registration failed").with_details(json!({
                "errors": errors,
                "username": rejection.username,
                "email": rejection.email,
            })))
        }
    }
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Logged in; redirect to /", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    if session.principal()?.is_some() {
        return Ok(see_other("/"));
    }

    let payload = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&payload.email, &payload.password)
        .map_err(map_login_validation_error)?;
    let principal = state.login.authenticate(&credentials).await?;
    session.persist_principal(&principal)?;
    Ok(see_other("/"))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "empty_email" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Drop the principal and redirect to the login page.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 303, description = "Logged out; redirect to /login")
    ),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear_principal();
    session.push_flash(FlashKind::Success, "You are logged out");
    see_other("/login")
}

/// Current principal plus the drained flash queue.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session state", body = SessionView)
    ),
    tags = ["users"],
    operation_id = "currentSession",
    security([])
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<SessionView>> {
    let user = session.principal()?;
    let flash = session.take_flash();
    Ok(web::Json(SessionView { user, flash }))
}

/// The authenticated user's profile record.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile", body = ProfileView),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "No profile record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ProfileView>> {
    let principal = session.require_principal()?;
    let user = state
        .users
        .find_by_id(&principal.id)
        .await
        .map_err(|err| Error::internal(format!("user store error: {err}")))?
        .ok_or_else(|| Error::not_found("user not found"))?;
    Ok(web::Json(user.into()))
}
