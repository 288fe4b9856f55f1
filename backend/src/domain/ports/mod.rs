//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) abstract the document store; driving ports
//! (use-cases) are what the inbound HTTP adapter calls. Each port ships a
//! `Fixture*` no-op implementation and, under test, a mockall mock.

mod category_repository;
mod login_service;
mod profile_command;
mod question_command;
mod question_repository;
mod registration;
mod user_repository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::{
    ALLOWED_AVATAR_MEDIA_TYPES, AvatarUpload, FieldFailure, FixtureProfileCommand, ProfileChanges,
    ProfileCommand, ProfileField, ProfileUpdateReport,
};
#[cfg(test)]
pub use question_command::MockQuestionCommand;
pub use question_command::{
    FixtureQuestionCommand, QuestionCommand, QuestionReceipt, SubmitQuestionRequest,
};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{
    FixtureQuestionRepository, QuestionRepository, QuestionRepositoryError,
};
#[cfg(test)]
pub use registration::MockRegistrationService;
pub use registration::{
    FixtureRegistrationService, RegistrationIssue, RegistrationOutcome, RegistrationReceipt,
    RegistrationRejection, RegistrationRequest, RegistrationService,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
