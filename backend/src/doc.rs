//! OpenAPI documentation configuration.
//!
//! The generated specification is served as JSON at
//! `/api-docs/openapi.json` in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Principal};
use crate::inbound::http::profile::{AvatarUploadRequest, OneOrMany, ProfileUpdateRequest};
use crate::inbound::http::questions::{CategoryView, QuestionView, SubmitQuestionBody};
use crate::inbound::http::session::{FlashKind, FlashMessage};
use crate::inbound::http::users::{LoginRequest, ProfileView, RegisterRequest, SessionView};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Community Q&A backend API",
        description = "Registration, sessions, profile updates, and question submission."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_session,
        crate::inbound::http::users::current_user,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::questions::submit_question,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::list_categories,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Principal,
        RegisterRequest,
        LoginRequest,
        SessionView,
        ProfileView,
        FlashKind,
        FlashMessage,
        AvatarUploadRequest,
        OneOrMany,
        ProfileUpdateRequest,
        SubmitQuestionBody,
        QuestionView,
        CategoryView,
    )),
    tags(
        (name = "users", description = "Accounts and sessions"),
        (name = "profile", description = "Profile mutation"),
        (name = "questions", description = "Questions and categories"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/v1/register",
            "/api/v1/login",
            "/api/v1/logout",
            "/api/v1/session",
            "/api/v1/users/me",
            "/api/v1/profile",
            "/api/v1/questions",
            "/api/v1/categories",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }
}
