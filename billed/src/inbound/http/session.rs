//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! the storage entries the router reads: the `user` identity and the `jwt`
//! bearer token.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::KeyValueStorage;
use crate::domain::{Error, Identity, JWT_STORAGE_KEY, USER_STORAGE_KEY};
use crate::outbound::MemoryStorage;

const FORWARDED_KEYS: [&str; 2] = [USER_STORAGE_KEY, JWT_STORAGE_KEY];

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the signed-in identity in the session cookie.
    pub fn persist_identity(&self, identity: &Identity) -> Result<(), Error> {
        let stored = identity
            .to_stored()
            .map_err(|error| Error::internal(format!("failed to encode identity: {error}")))?;
        self.insert(USER_STORAGE_KEY, stored)
    }

    /// Persist the bills API bearer token in the session cookie.
    pub fn persist_token(&self, token: &str) -> Result<(), Error> {
        self.insert(JWT_STORAGE_KEY, token.to_owned())
    }

    /// Copy the router's storage entries out of the session.
    ///
    /// The identity is copied verbatim; a malformed record is for the router
    /// to reject.
    pub fn to_storage(&self) -> Result<MemoryStorage, Error> {
        let storage = MemoryStorage::default();
        for key in FORWARDED_KEYS {
            let value = self
                .0
                .get::<String>(key)
                .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
            if let Some(value) = value {
                storage
                    .set(key, &value)
                    .map_err(|error| Error::internal(error.to_string()))?;
            }
        }
        Ok(storage)
    }

    fn insert(&self, key: &str, value: String) -> Result<(), Error> {
        self.0
            .insert(key, value)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
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
