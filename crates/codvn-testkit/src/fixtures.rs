//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use codvn_core::{HashAlgorithm, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Low work factor for fixtures. Real records use
/// [`HashAlgorithm::default_iterations`].
pub const FAST_ITERATIONS: u32 = 8;

/// A test fixture with a seeded salt source.
pub struct TestFixture {
    pub rng: StdRng,
    pub iterations: u32,
}

impl TestFixture {
    /// Create a new test fixture with an entropy-seeded salt source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            iterations: FAST_ITERATIONS,
        }
    }

    /// Create with a deterministic salt source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            iterations: FAST_ITERATIONS,
        }
    }

    /// Use the issuing system's default work factor instead of the fast one.
    pub fn with_default_iterations(mut self, algorithm: HashAlgorithm) -> Self {
        self.iterations = algorithm.default_iterations();
        self
    }

    /// Hash `password` under a fresh salt.
    pub fn make_record(&mut self, algorithm: HashAlgorithm, password: &[u8]) -> Record {
        Record::generate(algorithm, password, self.iterations, &mut self.rng)
            .expect("fixture iterations are non-zero")
    }

    /// Hash `password` and render it as text.
    pub fn make_text(&mut self, algorithm: HashAlgorithm, password: &[u8]) -> String {
        self.make_record(algorithm, password).to_text()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One record per supported algorithm, all for the same password.
pub fn per_algorithm_records(seed: u64, password: &[u8]) -> Vec<Record> {
    let mut fixture = TestFixture::with_seed(seed);
    HashAlgorithm::ALL
        .iter()
        .map(|alg| fixture.make_record(*alg, password))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_records_verify() {
        let mut fixture = TestFixture::new();
        for alg in HashAlgorithm::ALL {
            let record = fixture.make_record(alg, b"hello");
            assert!(record.verify(b"hello").is_ok());
            assert!(record.verify(b"hellO").is_err());
        }
    }

    #[test]
    fn test_seeded_fixture_is_deterministic() {
        let mut f1 = TestFixture::with_seed(42);
        let mut f2 = TestFixture::with_seed(42);
        assert_eq!(
            f1.make_text(HashAlgorithm::Sha256, b"pw"),
            f2.make_text(HashAlgorithm::Sha256, b"pw")
        );
    }

    #[test]
    fn test_salts_differ_between_records() {
        let mut fixture = TestFixture::with_seed(1);
        let a = fixture.make_record(HashAlgorithm::Sha1, b"pw");
        let b = fixture.make_record(HashAlgorithm::Sha1, b"pw");
        assert_ne!(a.salt(), b.salt());
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_per_algorithm_records() {
        let records = per_algorithm_records(3, b"pw");
        assert_eq!(records.len(), 4);
        for (record, alg) in records.iter().zip(HashAlgorithm::ALL) {
            assert_eq!(record.algorithm(), alg);
            assert_eq!(record.salt().len(), alg.default_salt_len());
        }
    }

    #[test]
    fn test_default_iterations() {
        let mut fixture =
            TestFixture::with_seed(9).with_default_iterations(HashAlgorithm::Sha1);
        let record = fixture.make_record(HashAlgorithm::Sha1, b"pw");
        assert_eq!(record.iterations(), 1024);
    }
}
