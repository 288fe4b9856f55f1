//! Port wiring for the HTTP server.

use std::sync::Arc;

use crate::domain::{
    PasswordLoginService, ProfileServiceImpl, QuestionSubmissionService, RegistrationServiceImpl,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    MemoryCategoryRepository, MemoryQuestionRepository, MemoryUserRepository,
};
use crate::server::ServerConfig;

/// Wire the in-memory adapters and the domain services into the handler
/// state.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    let users = Arc::new(MemoryUserRepository::new());
    let categories = Arc::new(MemoryCategoryRepository::with_categories(
        config.seed_categories.iter().cloned(),
    ));
    let questions = Arc::new(MemoryQuestionRepository::new());

    HttpState {
        registration: Arc::new(RegistrationServiceImpl::new(users.clone())),
        login: Arc::new(PasswordLoginService::new(users.clone())),
        profile: Arc::new(ProfileServiceImpl::new(users.clone())),
        questions: Arc::new(QuestionSubmissionService::new(
            categories.clone(),
            questions.clone(),
        )),
        users,
        categories,
        question_store: questions,
    }
}
