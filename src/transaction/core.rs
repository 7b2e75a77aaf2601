//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, TransactionId, session::SessionId};

// ============================================================================
// MODELS
// ============================================================================

/// A credit or debit recorded against a session.
///
/// To create a new `Transaction`, validate the input as a [NewTransaction] and
/// pass it to [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub title: String,
    /// The signed amount of money.
    ///
    /// Positive values are credits (money coming in), negative values are
    /// debits (money going out).
    pub amount: f64,
    /// When the transaction was recorded, in UTC as "YYYY-MM-DD HH:MM:SS".
    ///
    /// Set by the database.
    pub created_at: String,
    /// The session the transaction belongs to.
    pub session_id: Option<SessionId>,
}

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, increases the balance.
    Credit,
    /// Money going out, decreases the balance.
    Debit,
}

impl TransactionType {
    /// Apply the direction of the transaction to the magnitude `amount`.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        }
    }
}

/// A validated transaction that is ready to be inserted into the database.
///
/// The amount is already signed according to the transaction type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    title: String,
    amount: f64,
}

impl NewTransaction {
    /// Validate the input for a new transaction.
    ///
    /// `amount` is the magnitude of the transaction, its sign is set by
    /// `transaction_type`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTitle] if `title` is empty,
    /// - or [Error::InvalidAmount] if `amount` is negative, infinite or NaN.
    pub fn new(
        title: &str,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Result<Self, Error> {
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Self {
            title: title.to_owned(),
            amount: transaction_type.signed_amount(amount),
        })
    }

    /// The title of the transaction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The signed amount of the transaction.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// The balance of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all the session's transactions.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction for `session_id` in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (id, title, amount, session_id)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, created_at, session_id",
        )?
        .query_row(
            (
                TransactionId::generate(),
                transaction.title,
                transaction.amount,
                session_id,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all the transactions that belong to `session_id`.
///
/// The transactions are returned in the order the database yields them.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, created_at, session_id FROM transactions
             WHERE session_id = :session_id",
        )?
        .query_map(&[(":session_id", session_id)], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve the transaction `id` if it belongs to `session_id`.
///
/// Returns `None` if there is no such transaction, including when the ID
/// belongs to another session.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transaction(
    id: TransactionId,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Option<Transaction>, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, title, amount, created_at, session_id FROM transactions
             WHERE id = ?1 AND session_id = ?2",
        )?
        .query_row((id, session_id), map_transaction_row)
        .optional()?;

    Ok(transaction)
}

/// Get the sum of the amounts of all the transactions of `session_id`.
///
/// A session with no transactions has a balance of zero.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_summary_amount(session_id: &SessionId, connection: &Connection) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM transactions WHERE session_id = ?1",
            (session_id,),
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                session_id TEXT
                )",
        (),
    )?;

    // Every query filters by session.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_session_id ON transactions(session_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let created_at = row.get(3)?;
    let session_id = row.get(4)?;

    Ok(Transaction {
        id,
        title,
        amount,
        created_at,
        session_id,
    })
}

// ============================================================================
// TESTS
// ============================================================================
