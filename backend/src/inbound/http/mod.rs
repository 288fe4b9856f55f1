//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod profile;
pub mod questions;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::HttpResponse;
use actix_web::http::header;

/// Build the `303 See Other` page-flow redirect used by the mutating
/// endpoints.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
