//! Defines the endpoint for getting a single transaction.

use axum::{Extension, Json, extract::Path, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error, TransactionId,
    session::SessionId,
    transaction::{Transaction, TransactionState, core::get_transaction},
};

/// The response body for a single transaction.
///
/// The `transactions` key is left out when the session has no transaction
/// with the requested ID.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The requested transaction, if the session has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Transaction>,
}

/// A route handler for getting one of a session's transactions by its ID.
///
/// The ID is validated before the database is queried. An ID that belongs to
/// another session is treated the same as one that does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, Error> {
    let transaction_id: TransactionId = transaction_id
        .parse()
        .map_err(|_| Error::InvalidTransactionId(transaction_id))?;

    let transaction = get_transaction(transaction_id, &session_id, &*state.connection()?)?;

    Ok(Json(TransactionResponse {
        transactions: transaction,
    }))
}
