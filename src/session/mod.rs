//! Anonymous sessions identified by the `sessionId` cookie.
//!
//! This module contains:
//! - The [SessionId] type that scopes every transaction query
//! - Cookie helpers for reading and minting session IDs
//! - The middleware that rejects requests without a session

mod cookie;
mod middleware;

use std::fmt;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use cookie::{COOKIE_SESSION_ID, DEFAULT_SESSION_DURATION, get_or_create_session_id, get_session_id};
pub use middleware::require_session;

/// The opaque identifier of an anonymous session.
///
/// The value is whatever the client sent in the `sessionId` cookie. Session
/// IDs minted by the server are random (v4) UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new, random session ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing session ID, e.g. from a cookie.
    ///
    /// Returns `None` if `value` is empty.
    pub fn new(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_owned()))
        }
    }

    /// The session ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToSql for SessionId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for SessionId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(|session_id| Self(session_id.to_owned()))
    }
}
