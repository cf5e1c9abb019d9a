//! # CODVN Testkit
//!
//! Testing utilities for CODVN H password hashes.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Known vectors**: Hashes produced by the issuing system, with their passwords
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic record factories for integration tests
//!
//! ## Known Vectors
//!
//! ```rust
//! use codvn_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let record = codvn_core::decode(vector.hashed).unwrap();
//!     assert_eq!(record.to_text(), vector.canonical);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use codvn_testkit::generators::{record_from_params, RecordParams};
//!
//! proptest! {
//!     #[test]
//!     fn text_roundtrips(params: RecordParams) {
//!         let record = record_from_params(&params);
//!         let text = record.to_text();
//!         prop_assert_eq!(codvn_core::decode(&text).unwrap().to_text(), text);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use codvn_core::HashAlgorithm;
//! use codvn_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::with_seed(7);
//! let record = fixture.make_record(HashAlgorithm::Sha256, b"password");
//! assert!(record.verify(b"password").is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{per_algorithm_records, TestFixture};
pub use generators::{record_from_params, RecordParams};
pub use vectors::{all_vectors, vectors_json, verify_all_vectors, KnownVector};
