//! The state shared by the transaction route handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;
use time::Duration;

use crate::{AppState, Error};

/// The state needed to get or create transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The max age of a newly minted session cookie.
    pub session_duration: Duration,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            session_duration: state.session_duration,
        }
    }
}

impl TransactionState {
    /// Lock the database connection.
    ///
    /// # Errors
    /// Returns a [Error::DatabaseLockError] if the lock is poisoned.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)
    }
}

#[cfg(test)]
impl TransactionState {
    /// Create state backed by a fresh in-memory database.
    pub fn in_memory() -> Self {
        let connection = Connection::open_in_memory().unwrap();
        crate::db::initialize(&connection).unwrap();

        Self {
            db_connection: Arc::new(Mutex::new(connection)),
            session_duration: crate::DEFAULT_SESSION_DURATION,
        }
    }
}
