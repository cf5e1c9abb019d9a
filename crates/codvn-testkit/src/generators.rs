//! Proptest generators for property-based testing.

use proptest::prelude::*;

use codvn_core::{HashAlgorithm, Record};

/// Generate a supported algorithm.
pub fn algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha384),
        Just(HashAlgorithm::Sha512),
    ]
}

/// Generate a valid (non-zero) iteration count up to `max`.
pub fn iterations(max: u32) -> impl Strategy<Value = u32> {
    1u32..=max
}

/// Generate salt bytes of up to `max_len` bytes, possibly empty.
pub fn salt(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate password bytes of up to `max_len` bytes.
pub fn password(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a `digest || salt` payload that is valid for `algorithm`.
pub fn payload_for(algorithm: HashAlgorithm, max_salt: usize) -> impl Strategy<Value = Vec<u8>> {
    let size = algorithm.digest_len();
    prop::collection::vec(any::<u8>(), size..=size + max_salt)
}

/// Generate a decodable record with arbitrary digest bytes.
///
/// These records are structurally valid but were not produced by hashing, so
/// they are for codec tests only.
pub fn arbitrary_record() -> impl Strategy<Value = Record> {
    (algorithm(), 1u32..=u32::MAX)
        .prop_flat_map(|(alg, iters)| (Just(alg), Just(iters), payload_for(alg, 32)))
        .prop_filter_map("payload shorter than digest", |(alg, iters, payload)| {
            Record::from_payload(alg, iters, &payload).ok()
        })
}

/// Parameters for constructing a record by hashing.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub algorithm: HashAlgorithm,
    pub password: Vec<u8>,
    pub salt: Vec<u8>,
    pub iterations: u32,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            algorithm(),
            password(64),
            salt(32),
            iterations(16), // kept low: every case runs the full chain
        )
            .prop_map(|(algorithm, password, salt, iterations)| RecordParams {
                algorithm,
                password,
                salt,
                iterations,
            })
            .boxed()
    }
}

/// Construct a record from parameters.
pub fn record_from_params(params: &RecordParams) -> Record {
    Record::construct(
        params.algorithm,
        &params.password,
        &params.salt,
        params.iterations,
    )
    .expect("generated iterations are non-zero")
}
