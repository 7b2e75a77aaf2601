//! Defines the endpoint for a session's balance.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Summary, TransactionState, core::get_summary_amount},
};

/// The response body holding a session's balance.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The balance of the session.
    pub summary: Summary,
}

/// A route handler for getting the sum of a session's transactions.
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error> {
    let amount = get_summary_amount(&session_id, &*state.connection()?)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
