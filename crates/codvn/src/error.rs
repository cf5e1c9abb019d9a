//! Error types for the verifier.

use codvn_core::CodvnError;
use thiserror::Error;

/// Errors that can occur during Verifier operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifierError {
    /// Parse, construct or verification error from the codec/engine.
    #[error(transparent)]
    Codec(#[from] CodvnError),

    /// The record asks for more work than the configured ceiling allows.
    #[error("iteration count {iterations} exceeds policy limit {limit}")]
    IterationLimitExceeded { iterations: u32, limit: u32 },

    /// The record is weaker than the configured floor.
    #[error("iteration count {iterations} is below policy minimum {minimum}")]
    IterationsBelowMinimum { iterations: u32, minimum: u32 },
}

impl VerifierError {
    /// True when the record was fine and the password was wrong.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, VerifierError::Codec(CodvnError::VerificationMismatch))
    }
}

/// Result type for Verifier operations.
pub type Result<T> = std::result::Result<T, VerifierError>;
