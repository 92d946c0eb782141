//! Error types for mir-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the package-assembly gate.
///
/// The parser itself never errors: malformed blocks are dropped silently
/// and only the question count reflects them.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("input text is empty")]
    EmptyText,

    #[error("no valid questions found")]
    NoValidQuestions,
}
