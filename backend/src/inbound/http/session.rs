//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal with domain-friendly operations:
//! persisting the principal, gating on authentication, and the flash-message
//! queue that carries page-flow notifications across redirects.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Principal, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const FLASH_KEY: &str = "flash";

/// Category of a flash message, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notification queued in the session and drained on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated principal in the session cookie.
    pub fn persist_principal(&self, principal: &Principal) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, principal.id.to_string())
            .and_then(|()| self.0.insert(USERNAME_KEY, principal.username.clone()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current principal from the session, if present.
    ///
    /// A tampered or stale user id is treated as an absent principal, not
    /// an error.
    pub fn principal(&self) -> Result<Option<Principal>, Error> {
        let raw_id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw_id) = raw_id else {
            return Ok(None);
        };
        let id = match UserId::new(&raw_id) {
            Ok(id) => id,
            Err(error) => {
                tracing::warn!("invalid user id in session cookie: {error}");
                return Ok(None);
            }
        };
        let username = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?
            .unwrap_or_default();
        Ok(Some(Principal { id, username }))
    }

    /// Require an authenticated principal or return `401 Unauthorized`.
    pub fn require_principal(&self) -> Result<Principal, Error> {
        self.principal()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop the principal, keeping the rest of the session (flash queue)
    /// intact.
    pub fn clear_principal(&self) {
        self.0.remove(USER_ID_KEY);
        self.0.remove(USERNAME_KEY);
    }

    /// Queue a flash message, fire-and-forget.
    ///
    /// Flash delivery is a courtesy; a session write failure here must not
    /// fail the request that triggered it.
    pub fn push_flash(&self, kind: FlashKind, message: impl Into<String>) {
        let mut queue = self.peek_flash();
        queue.push(FlashMessage {
            kind,
            message: message.into(),
        });
        if let Err(error) = self.0.insert(FLASH_KEY, queue) {
            tracing::warn!(error = %error, "failed to queue flash message");
        }
    }

    /// Drain the flash queue: messages are delivered at most once.
    pub fn take_flash(&self) -> Vec<FlashMessage> {
        let queue = self.peek_flash();
        if !queue.is_empty() {
            self.0.remove(FLASH_KEY);
        }
        queue
    }

    fn peek_flash(&self) -> Vec<FlashMessage> {
        match self.0.get::<Vec<FlashMessage>>(FLASH_KEY) {
            Ok(queue) => queue.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(error = %error, "discarding unreadable flash queue");
                Vec::new()
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
