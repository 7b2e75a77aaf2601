//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::get_or_create_session_id,
    transaction::{NewTransaction, TransactionState, TransactionType, core::create_transaction},
};

/// The JSON body for creating a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionForm {
    /// Text detailing the transaction.
    pub title: String,
    /// The magnitude of the transaction.
    pub amount: f64,
    /// Whether the money came in or went out.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl TryFrom<CreateTransactionForm> for NewTransaction {
    type Error = Error;

    fn try_from(form: CreateTransactionForm) -> Result<Self, Self::Error> {
        NewTransaction::new(&form.title, form.amount, form.transaction_type)
    }
}

/// A route handler for creating a new transaction, responds with 201 Created
/// and an empty body on success.
///
/// If the request has no session cookie, a new session is started and its
/// cookie is set on the response.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    form: Result<Json<CreateTransactionForm>, JsonRejection>,
) -> Result<Response, Error> {
    let Json(form) = form.map_err(|rejection| {
        tracing::debug!("rejected transaction body: {rejection}");
        Error::InvalidRequestBody(rejection.body_text())
    })?;
    let transaction = NewTransaction::try_from(form)?;

    let (jar, session_id) = get_or_create_session_id(jar, state.session_duration);

    create_transaction(transaction, &session_id, &*state.connection()?)?;

    Ok((StatusCode::CREATED, jar).into_response())
}
