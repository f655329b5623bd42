//! Contract Violations
//!
//! Every failure in the pipeline is a local, non-retryable programming-contract
//! violation of one of two kinds. Callers match on [`BenchError::kind`].

use thiserror::Error;

/// Result alias used throughout AlgoBench
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised by the measurement and result-processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// Malformed or out-of-range input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A well-typed call made at the wrong point of a state machine
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Discriminant of a [`BenchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`BenchError::InvalidArgument`]
    InvalidArgument,
    /// See [`BenchError::InvalidState`]
    InvalidState,
}

impl BenchError {
    /// Build an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BenchError::InvalidArgument(message.into())
    }

    /// Build an `InvalidState` error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        BenchError::InvalidState(message.into())
    }

    /// Which kind of contract was violated
    pub fn kind(&self) -> ErrorKind {
        match self {
            BenchError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BenchError::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    /// The message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            BenchError::InvalidArgument(m) | BenchError::InvalidState(m) => m,
        }
    }
}
