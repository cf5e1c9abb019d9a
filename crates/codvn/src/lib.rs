//! # CODVN
//!
//! Parse, render and verify SAP CODVN H (`PWDSALTEDHASH`) password hashes.
//!
//! ## Overview
//!
//! A CODVN H record names its digest, its work factor and carries
//! `digest || salt` in base64:
//!
//! ```text
//! {x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=
//! {x-isSHA256,10000}...
//! {x-isSHA384,7500}...
//! {x-isSHA512,15000}...
//! ```
//!
//! The digest is `H(password || H(password || ... H(password || salt)))`,
//! `iterations` deep. Verification compares in constant time.
//!
//! ## Usage
//!
//! ```rust
//! use codvn::{Verifier, VerifierConfig};
//!
//! let hashed = "{x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=";
//!
//! // Free functions: no policy.
//! codvn::verify_text(hashed, b"Pindakaas!").unwrap();
//! assert!(codvn::verify_text(hashed, b"wrong").is_err());
//!
//! // Verifier: bound the work factor of untrusted records.
//! let verifier = Verifier::new(VerifierConfig::default().with_max_iterations(100_000));
//! verifier.verify_text(hashed, b"Pindakaas!").unwrap();
//!
//! // Round-trip.
//! let record = codvn::parse(hashed.as_bytes()).unwrap();
//! assert_eq!(record.to_text(), hashed);
//! ```
//!
//! ## Re-exports
//!
//! - `codvn::core` - Algorithm table, codec and engine

pub mod error;
pub mod verifier;

// Re-export component crate
pub use codvn_core as core;

// Re-export main types for convenience
pub use error::{Result, VerifierError};
pub use verifier::{Verifier, VerifierConfig};

pub use codvn_core::{
    decode, encode, iterated_hash, verify_text, CodvnError, HashAlgorithm, Record,
};

/// Parse a hashed password from raw bytes.
pub fn parse(raw: &[u8]) -> std::result::Result<Record, CodvnError> {
    Record::parse(raw)
}
