//! Error types for session operations.

use thiserror::Error;

use crate::cards::CardId;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors a session rejects at its boundary.
///
/// Tapping a matched or face-up card is not an error; those taps are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("card index {index} out of range for deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no card with id {0} in this session")]
    UnknownCard(CardId),

    #[error("pair count must be at least 1, got {0}")]
    InvalidPairCount(usize),
}
