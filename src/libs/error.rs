//! Domain error taxonomy for the ledger.
//!
//! Everything below the command layer reports failures as [`LedgerError`].
//! Commands convert into `anyhow::Error` at the boundary, and `main` prints
//! the full chain before exiting with status 1.

use crate::libs::messages::Message;
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field is missing or a numeric field is out of bounds.
    #[error("{0}")]
    Validation(Message),

    /// A date argument could not be parsed as `YYYY-MM-DD` (or `YYYY-MM`).
    #[error("{0}")]
    InvalidDateFormat(Message),

    /// Week, month or year outside the representable range.
    #[error("{0}")]
    InvalidRange(Message),

    /// The store rejected or failed an operation.
    #[error("{operation}")]
    Store {
        operation: Message,
        #[source]
        source: rusqlite::Error,
    },

    /// A file or directory the store needs could not be created.
    #[error("{context}")]
    Filesystem {
        context: Message,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written.
    #[error("{context}")]
    Render {
        context: Message,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LedgerError {
    pub fn render(context: Message, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        LedgerError::Render {
            context,
            source: source.into(),
        }
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LedgerError::Validation(_) | LedgerError::InvalidDateFormat(_) | LedgerError::InvalidRange(_)
        )
    }
}

/// Attaches the failed operation to a `rusqlite` error.
pub trait StoreResultExt<T> {
    fn store_op(self, operation: impl FnOnce() -> Message) -> LedgerResult<T>;
}

impl<T> StoreResultExt<T> for rusqlite::Result<T> {
    fn store_op(self, operation: impl FnOnce() -> Message) -> LedgerResult<T> {
        self.map_err(|source| LedgerError::Store {
            operation: operation(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn store_error_keeps_operation_and_source() {
        let result: rusqlite::Result<()> = Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.store_op(|| Message::FetchEntriesFailed).unwrap_err();

        assert_eq!(err.to_string(), Message::FetchEntriesFailed.to_string());
        assert!(err.source().is_some());
        assert!(!err.is_user_error());
    }

    #[test]
    fn validation_displays_message_verbatim() {
        let err = LedgerError::Validation(Message::HoursMustBePositive);
        assert_eq!(err.to_string(), "Hours must be greater than zero");
        assert!(err.is_user_error());
    }
}
