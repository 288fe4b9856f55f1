//! Persistence adapters.
//!
//! The document store is represented by in-memory adapters: each map sits
//! behind a `tokio::sync::RwLock`, giving per-record write atomicity and
//! nothing more. There are no cross-record transactions, matching the
//! concurrency model of the domain.

mod memory_category_repository;
mod memory_question_repository;
mod memory_user_repository;

pub use memory_category_repository::MemoryCategoryRepository;
pub use memory_question_repository::MemoryQuestionRepository;
pub use memory_user_repository::MemoryUserRepository;
