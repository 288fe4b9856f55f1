//! Domain layer: entities, value objects, ports, and use-case services.
//!
//! Nothing in here knows about HTTP or the concrete stores; the inbound
//! adapter drives the use-case ports and the outbound adapters implement
//! the repository ports.

mod auth;
mod auth_service;
mod category;
mod error;
pub mod password;
mod profile_service;
mod question;
mod registration_service;
mod submission_service;
pub mod text;
mod user;

pub mod ports;

pub use auth::{LoginCredentials, LoginValidationError, Principal};
pub use auth_service::PasswordLoginService;
pub use category::{Category, CategoryId, InvalidCategoryId};
pub use error::{Error, ErrorCode};
pub use profile_service::ProfileServiceImpl;
pub use question::{InvalidQuestionId, Question, QuestionId};
pub use registration_service::{PASSWORD_MIN, RegistrationServiceImpl};
pub use submission_service::QuestionSubmissionService;
pub use user::{EmailAddress, User, UserId, UserValidationError};
