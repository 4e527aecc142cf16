//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only deal with domain identities
//! ([`SessionUser`]) and [`FlashMessage`]s.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, SessionUser};
use crate::inbound::http::flash::FlashMessage;

pub(crate) const USER_KEY: &str = "user";
pub(crate) const FLASHES_KEY: &str = "_flashes";

/// Message returned by JSON endpoints when no one is signed in.
pub const LOGIN_REQUIRED_MESSAGE: &str = "login required";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in identity, rotating the session first.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in identity, if any.
    ///
    /// An undecodable entry is treated as signed out.
    pub fn current_user(&self) -> Result<Option<SessionUser>, Error> {
        match self.0.get::<SessionUser>(USER_KEY) {
            Ok(user) => Ok(user),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable session user");
                self.0.remove(USER_KEY);
                Ok(None)
            }
        }
    }

    /// Require a signed-in identity or return `401 Unauthorized`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        self.current_user()?
            .ok_or_else(|| Error::unauthorized(LOGIN_REQUIRED_MESSAGE))
    }

    /// Drop everything in the session, flashes included, and rotate its
    /// key. Unlike a purge the session stays writable, so a flash queued
    /// afterwards survives to the next page.
    pub fn clear(&self) {
        self.0.clear();
        self.0.renew();
    }

    /// Queue `flash` for the next rendered page.
    pub fn push_flash(&self, flash: FlashMessage) -> Result<(), Error> {
        let mut queued = self.peek_flashes();
        queued.push(flash);
        self.0
            .insert(FLASHES_KEY, queued)
            .map_err(|error| Error::internal(format!("failed to store flash message: {error}")))
    }

    /// Remove and return every queued flash, oldest first.
    pub fn take_flashes(&self) -> Vec<FlashMessage> {
        self.0
            .remove_as::<Vec<FlashMessage>>(FLASHES_KEY)
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    fn peek_flashes(&self) -> Vec<FlashMessage> {
        self.0
            .get::<Vec<FlashMessage>>(FLASHES_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
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

/// The signed-in identity, extracted ahead of a handler's other
/// arguments.
///
/// List it first: an anonymous request then fails with `401` before any
/// path or body extractor runs.
pub struct SignedIn(pub SessionUser);

impl FromRequest for SignedIn {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            Ok(Self(session.require_user()?))
        })
    }
}
