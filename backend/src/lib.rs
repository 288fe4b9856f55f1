//! Community Q&A backend: registration, sessions, profile mutation, and
//! question submission behind a hexagonal boundary.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::RequestTrace;
