//! Database ID type definitions.

use std::{fmt, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The unique identifier of a transaction.
///
/// IDs are random (v4) UUIDs and are stored in the database in their
/// hyphenated text form, e.g. "67e55044-10b1-426f-9247-bb680e5fe0c8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new, random transaction ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The error returned when text is not a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected a hyphenated UUID, e.g. \"67e55044-10b1-426f-9247-bb680e5fe0c8\"")]
pub struct ParseTransactionIdError;

/// Byte offsets of the hyphens in the 8-4-4-4-12 form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

impl FromStr for TransactionId {
    type Err = ParseTransactionIdError;

    /// Parse a transaction ID from its hyphenated form.
    ///
    /// The simple, braced and URN forms are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let is_hyphenated = bytes.len() == 36
            && HYPHEN_POSITIONS
                .iter()
                .all(|&position| bytes[position] == b'-');

        if !is_hyphenated {
            return Err(ParseTransactionIdError);
        }

        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| ParseTransactionIdError)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for TransactionId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for TransactionId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
