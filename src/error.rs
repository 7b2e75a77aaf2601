//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The `sessionId` cookie is missing from a request that reads session
    /// data.
    #[error("Unauthorized.")]
    MissingSession,

    /// The transaction ID in the request path is not a valid UUID.
    #[error("invalid transaction ID \"{0}\": expected a UUID")]
    InvalidTransactionId(String),

    /// The request body could not be decoded into the expected shape, e.g.
    /// it is not JSON, a field is missing or has the wrong type, or the
    /// transaction type is neither "credit" nor "debit".
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// An empty string was used as a transaction title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// The amount given for a new transaction is negative or not a finite
    /// number.
    ///
    /// Amounts are magnitudes, the direction comes from the transaction type.
    #[error("{0} is not a valid amount, expected a finite number no less than zero")]
    InvalidAmount(f64),

    /// An unhandled/unexpected SQL error.
    ///
    /// The error is logged on the server and replaced with a generic message
    /// for the client.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A description of what went wrong.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::MissingSession => StatusCode::UNAUTHORIZED,
            Error::InvalidTransactionId(_)
            | Error::InvalidRequestBody(_)
            | Error::EmptyTitle
            | Error::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            // Storage details are for the server logs only.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}
