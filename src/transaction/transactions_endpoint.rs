//! Defines the endpoint for listing a session's transactions.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Transaction, TransactionState, core::get_transactions},
};

/// The response body listing a session's transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// All of the session's transactions, possibly none.
    pub transactions: Vec<Transaction>,
}

/// A route handler for getting all of a session's transactions.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionsResponse>, Error> {
    let transactions = get_transactions(&session_id, &*state.connection()?)?;

    Ok(Json(TransactionsResponse { transactions }))
}

#[cfg(test)]
mod tests {
    use axum::{Extension, extract::State};

    use crate::{
        session::SessionId,
        transaction::{
            NewTransaction, TransactionState, TransactionType, create_transaction,
            get_transactions_endpoint,
        },
    };

    #[tokio::test]
    async fn lists_only_the_sessions_transactions() {
        let state = TransactionState::in_memory();
        let session_id = SessionId::generate();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction::new("Other session", 1.0, TransactionType::Credit).unwrap(),
                &SessionId::generate(),
                &connection,
            )
            .unwrap();
            create_transaction(
                NewTransaction::new("Lunch", 12.5, TransactionType::Debit).unwrap(),
                &session_id,
                &connection,
            )
            .unwrap()
        };

        let response = get_transactions_endpoint(State(state), Extension(session_id))
            .await
            .unwrap();

        assert_eq!(response.0.transactions, vec![want]);
    }

    #[tokio::test]
    async fn empty_list_for_session_without_transactions() {
        let state = TransactionState::in_memory();

        let response = get_transactions_endpoint(State(state), Extension(SessionId::generate()))
            .await
            .unwrap();

        assert!(response.0.transactions.is_empty());
    }
}
