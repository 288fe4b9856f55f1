//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRepository, FixtureCategoryRepository, FixtureLoginService, FixtureProfileCommand,
    FixtureQuestionCommand, FixtureQuestionRepository, FixtureRegistrationService,
    FixtureUserRepository, LoginService, ProfileCommand, QuestionCommand, QuestionRepository,
    RegistrationService, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub login: Arc<dyn LoginService>,
    pub profile: Arc<dyn ProfileCommand>,
    pub questions: Arc<dyn QuestionCommand>,
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub question_store: Arc<dyn QuestionRepository>,
}

impl HttpState {
    /// State with fixture ports everywhere; tests override the ports under
    /// exercise.
    pub fn fixture() -> Self {
        Self {
            registration: Arc::new(FixtureRegistrationService),
            login: Arc::new(FixtureLoginService),
            profile: Arc::new(FixtureProfileCommand),
            questions: Arc::new(FixtureQuestionCommand),
            users: Arc::new(FixtureUserRepository),
            categories: Arc::new(FixtureCategoryRepository),
            question_store: Arc::new(FixtureQuestionRepository),
        }
    }
}
