//! Conversation history error types

use thiserror::Error;

/// Errors raised when a turn cannot be added to the history
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Invalid turn: {0}")]
    InvalidTurn(String),
}
