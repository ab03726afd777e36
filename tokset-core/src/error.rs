//! Error types for tokenizer, collection and support operations

use thiserror::Error;

/// Errors surfaced by the core components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    /// A token was requested after the input ran out
    #[error("no more tokens available")]
    Exhausted,

    /// An argument outside the accepted range
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// An argument lacked the semantics the operation requires
    #[error("precondition violated: {reason}")]
    PreconditionViolation {
        /// Which precondition failed
        reason: String,
    },
}

impl SupportError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        SupportError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        SupportError::PreconditionViolation {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SupportError>;
