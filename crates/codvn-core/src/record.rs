//! Record: one parsed CODVN H hash entry.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::algorithm::HashAlgorithm;
use crate::codec;
use crate::engine::{ct_eq, iterated_hash};
use crate::error::{CodvnError, Result};

/// A salted, iterated password hash.
///
/// Immutable once built. The digest is always exactly
/// `algorithm.digest_len()` bytes; the salt may be any length, including empty.
///
/// Records come from [`codec::decode`] (or [`Record::parse`]) and from
/// [`Record::construct`].
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    algorithm: HashAlgorithm,
    iterations: u32,
    digest: Vec<u8>,
    salt: Vec<u8>,
}

impl Record {
    /// Build a record from a decoded `digest || salt` payload.
    pub fn from_payload(algorithm: HashAlgorithm, iterations: u32, payload: &[u8]) -> Result<Self> {
        if iterations == 0 {
            return Err(CodvnError::InvalidIterationCount);
        }

        let size = algorithm.digest_len();
        if payload.len() < size {
            return Err(CodvnError::TruncatedInput {
                expected: size,
                actual: payload.len(),
            });
        }

        let (digest, salt) = payload.split_at(size);
        Ok(Self {
            algorithm,
            iterations,
            digest: digest.to_vec(),
            salt: salt.to_vec(),
        })
    }

    /// Hash `password` with the given salt and work factor.
    pub fn construct(
        algorithm: HashAlgorithm,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> Result<Self> {
        let digest = iterated_hash(algorithm, password, salt, iterations)?;
        Ok(Self {
            algorithm,
            iterations,
            digest,
            salt: salt.to_vec(),
        })
    }

    /// Hash `password` under a fresh random salt of the algorithm's default length.
    pub fn generate<R: RngCore + CryptoRng>(
        algorithm: HashAlgorithm,
        password: &[u8],
        iterations: u32,
        rng: &mut R,
    ) -> Result<Self> {
        let mut salt = vec![0u8; algorithm.default_salt_len()];
        rng.fill_bytes(&mut salt);
        Self::construct(algorithm, password, &salt, iterations)
    }

    /// Parse raw bytes. Non-UTF-8 input never matches the record pattern.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(raw).map_err(|_| CodvnError::UnknownHashKind)?;
        codec::decode(text)
    }

    /// Render the canonical text form.
    pub fn to_text(&self) -> String {
        codec::encode(self)
    }

    /// Check a candidate password.
    ///
    /// The digest comparison runs in constant time. A wrong password is
    /// [`CodvnError::VerificationMismatch`].
    pub fn verify(&self, candidate: &[u8]) -> Result<()> {
        let computed = iterated_hash(self.algorithm, candidate, &self.salt, self.iterations)?;
        if !ct_eq(&computed, &self.digest) {
            return Err(CodvnError::VerificationMismatch);
        }
        Ok(())
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The `digest || salt` payload carried in the base64 section.
    pub fn payload(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.digest.len() + self.salt.len());
        buf.extend_from_slice(&self.digest);
        buf.extend_from_slice(&self.salt);
        buf
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digest = hex::encode(&self.digest);
        f.debug_struct("Record")
            .field("algorithm", &self.algorithm)
            .field("iterations", &self.iterations)
            .field("digest", &format_args!("{}...", &digest[..8]))
            .field("salt_len", &self.salt.len())
            .finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Record {
    type Err = CodvnError;

    fn from_str(s: &str) -> Result<Self> {
        codec::decode(s)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        codec::decode(&text).map_err(serde::de::Error::custom)
    }
}
