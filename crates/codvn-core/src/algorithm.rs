//! The closed table of hash algorithms a CODVN H record can name.
//!
//! | Tag      | Digest  | Size | Default iterations | Default salt |
//! |----------|---------|------|--------------------|--------------|
//! | `sha`    | SHA-1   | 20   | 1024               | 12           |
//! | `SHA256` | SHA-256 | 32   | 10000              | 16           |
//! | `SHA384` | SHA-384 | 48   | 7500               | 12           |
//! | `SHA512` | SHA-512 | 64   | 15000              | 16           |
//!
//! Tags are case-sensitive. `sha` is lower case for historical reasons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodvnError;

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "sha")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in table order.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Resolve a record tag. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sha" => Some(HashAlgorithm::Sha1),
            "SHA256" => Some(HashAlgorithm::Sha256),
            "SHA384" => Some(HashAlgorithm::Sha384),
            "SHA512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// The canonical tag emitted on encode.
    pub const fn tag(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }

    /// Digest output size in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Iteration count the issuing system uses by default for this algorithm.
    pub const fn default_iterations(self) -> u32 {
        match self {
            HashAlgorithm::Sha1 => 1024,
            HashAlgorithm::Sha256 => 10_000,
            HashAlgorithm::Sha384 => 7_500,
            HashAlgorithm::Sha512 => 15_000,
        }
    }

    /// Salt length (bytes) the issuing system uses by default for this algorithm.
    pub const fn default_salt_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 12,
            HashAlgorithm::Sha256 => 16,
            HashAlgorithm::Sha384 => 12,
            HashAlgorithm::Sha512 => 16,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CodvnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or(CodvnError::UnknownHashKind)
    }
}
