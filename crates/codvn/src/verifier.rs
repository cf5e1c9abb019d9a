//! The Verifier: policy-aware entry point for checking passwords.
//!
//! The core engine accepts any positive iteration count. A record coming from
//! an untrusted source can therefore ask for an arbitrary amount of work.
//! The Verifier lets the caller bound that with [`VerifierConfig`].

use codvn_core::{CodvnError, HashAlgorithm, Record};
use rand::{CryptoRng, RngCore};

use crate::error::{Result, VerifierError};

/// Configuration for the Verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Records with fewer iterations are rejected.
    pub min_iterations: u32,
    /// Records with more iterations are rejected. `None` means unbounded.
    pub max_iterations: Option<u32>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            min_iterations: 1,
            max_iterations: None,
        }
    }
}

impl VerifierConfig {
    /// Bound the work factor from above.
    pub fn with_max_iterations(mut self, limit: u32) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Reject records weaker than `minimum`.
    pub fn with_min_iterations(mut self, minimum: u32) -> Self {
        self.min_iterations = minimum;
        self
    }
}

/// Parses and verifies CODVN H records under an iteration policy.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// Create a new verifier.
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Check a record's iteration count against the policy.
    pub fn check_policy(&self, record: &Record) -> Result<()> {
        self.check_iterations(record.algorithm(), record.iterations())
    }

    fn check_iterations(&self, algorithm: HashAlgorithm, iterations: u32) -> Result<()> {
        if iterations < self.config.min_iterations {
            tracing::warn!(
                %algorithm,
                iterations,
                minimum = self.config.min_iterations,
                "iteration count below policy floor"
            );
            return Err(VerifierError::IterationsBelowMinimum {
                iterations,
                minimum: self.config.min_iterations,
            });
        }

        if let Some(limit) = self.config.max_iterations {
            if iterations > limit {
                tracing::warn!(
                    %algorithm,
                    iterations,
                    limit,
                    "iteration count exceeds policy ceiling"
                );
                return Err(VerifierError::IterationLimitExceeded { iterations, limit });
            }
        }

        Ok(())
    }

    /// Parse a record and apply the policy.
    pub fn parse(&self, text: &str) -> Result<Record> {
        let record = text.parse::<Record>().map_err(|e| {
            tracing::debug!(error = %e, "rejected password hash record");
            VerifierError::from(e)
        })?;
        self.check_policy(&record)?;
        Ok(record)
    }

    /// Verify a candidate password against a record.
    pub fn verify(&self, record: &Record, candidate: &[u8]) -> Result<()> {
        self.check_policy(record)?;

        match record.verify(candidate) {
            Ok(()) => {
                tracing::trace!(algorithm = %record.algorithm(), "password verified");
                Ok(())
            }
            Err(CodvnError::VerificationMismatch) => {
                tracing::debug!(algorithm = %record.algorithm(), "password mismatch");
                Err(CodvnError::VerificationMismatch.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse `hashed`, apply the policy, then verify `candidate`.
    pub fn verify_text(&self, hashed: &str, candidate: &[u8]) -> Result<()> {
        let record = self.parse(hashed)?;
        self.verify(&record, candidate)
    }

    /// Hash a password with the algorithm's default salt length and iteration count.
    pub fn hash(&self, algorithm: HashAlgorithm, password: &[u8]) -> Result<Record> {
        self.hash_with_rng(algorithm, password, &mut rand::thread_rng())
    }

    /// Like [`Verifier::hash`], drawing the salt from `rng`.
    pub fn hash_with_rng<R: RngCore + CryptoRng>(
        &self,
        algorithm: HashAlgorithm,
        password: &[u8],
        rng: &mut R,
    ) -> Result<Record> {
        let iterations = algorithm.default_iterations();
        self.check_iterations(algorithm, iterations)?;
        Ok(Record::generate(algorithm, password, iterations, rng)?)
    }
}
