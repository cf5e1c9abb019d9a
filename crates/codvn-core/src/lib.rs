//! # CODVN Core
//!
//! Pure primitives for SAP CODVN H (`PWDSALTEDHASH`) password hashes.
//!
//! This crate contains no I/O, no storage, no logging. It is pure computation
//! over one textual record format:
//!
//! ```text
//! {x-is<TAG>,<ITER>}base64(digest || salt)
//! ```
//!
//! ## Key Types
//!
//! - [`HashAlgorithm`] - The closed table of supported digests (`sha`, `SHA256`, `SHA384`, `SHA512`)
//! - [`Record`] - One parsed hash entry: algorithm, iterations, digest, salt
//! - [`CodvnError`] - Everything that can go wrong while parsing or verifying
//!
//! ## Codec
//!
//! Text is decoded with [`decode`] and rendered back with [`encode`]. Canonical
//! input round-trips byte for byte. See the [`codec`] module.
//!
//! ## Engine
//!
//! [`iterated_hash`] computes `state = H(password || state)` starting from the
//! salt. [`Record::verify`] compares the result against the stored digest in
//! constant time. See the [`engine`] module.

pub mod algorithm;
pub mod codec;
pub mod engine;
pub mod error;
pub mod record;

pub use algorithm::HashAlgorithm;
pub use codec::{decode, encode};
pub use engine::{ct_eq, iterated_hash};
pub use error::{CodvnError, Result};
pub use record::Record;

/// Parse a hashed password and verify a candidate against it.
pub fn verify_text(hashed: &str, candidate: &[u8]) -> Result<()> {
    decode(hashed)?.verify(candidate)
}
