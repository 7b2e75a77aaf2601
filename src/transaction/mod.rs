//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction`
//! - Database functions for storing and querying a session's transactions
//! - Route handlers for the transaction API

mod core;
mod create_endpoint;
mod state;
mod summary_endpoint;
mod transaction_endpoint;
mod transactions_endpoint;

pub use self::core::{
    NewTransaction, Summary, Transaction, TransactionType, create_transaction,
    create_transaction_table, get_summary_amount, get_transaction, get_transactions,
};
pub use create_endpoint::{CreateTransactionForm, create_transaction_endpoint};
pub use state::TransactionState;
pub use summary_endpoint::{SummaryResponse, get_summary_endpoint};
pub use transaction_endpoint::{TransactionResponse, get_transaction_endpoint};
pub use transactions_endpoint::{TransactionsResponse, get_transactions_endpoint};
