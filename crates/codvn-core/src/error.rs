//! Error types for CODVN Core.

use thiserror::Error;

/// Errors that can occur while parsing, constructing or verifying a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodvnError {
    /// The tag is not in the algorithm table, or the text does not have
    /// the `{x-is<TAG>,<ITER>}<BASE64>` shape at all.
    #[error("unknown hash schema")]
    UnknownHashKind,

    #[error("invalid iteration count")]
    InvalidIterationCount,

    #[error("malformed base64 payload: {0}")]
    MalformedEncoding(String),

    #[error("truncated input: need at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("password doesn't match")]
    VerificationMismatch,
}

impl CodvnError {
    /// True for every error raised while decoding text.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, CodvnError::VerificationMismatch)
    }
}

impl From<base64::DecodeError> for CodvnError {
    fn from(e: base64::DecodeError) -> Self {
        CodvnError::MalformedEncoding(e.to_string())
    }
}

/// Result type for CODVN Core operations.
pub type Result<T> = std::result::Result<T, CodvnError>;
