//! The iterated hash chain and constant-time digest comparison.
//!
//! Derivation:
//!
//! ```text
//! state = salt
//! repeat iterations times:
//!     state = H(password || state)
//! ```
//!
//! Every round starts from a fresh hasher. The loop never exits early: the
//! iteration count is the work factor.

use sha2::Digest;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::algorithm::HashAlgorithm;
use crate::error::{CodvnError, Result};

/// Run the iterated hash for `algorithm`.
///
/// Returns `algorithm.digest_len()` bytes. `iterations` must be at least 1.
pub fn iterated_hash(
    algorithm: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<Vec<u8>> {
    if iterations == 0 {
        return Err(CodvnError::InvalidIterationCount);
    }

    let digest = match algorithm {
        HashAlgorithm::Sha1 => chain::<sha1::Sha1>(password, salt, iterations),
        HashAlgorithm::Sha256 => chain::<sha2::Sha256>(password, salt, iterations),
        HashAlgorithm::Sha384 => chain::<sha2::Sha384>(password, salt, iterations),
        HashAlgorithm::Sha512 => chain::<sha2::Sha512>(password, salt, iterations),
    };
    debug_assert_eq!(digest.len(), algorithm.digest_len());

    Ok(digest)
}

fn chain<D: Digest>(password: &[u8], salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut state = Zeroizing::new(salt.to_vec());

    for _ in 0..iterations {
        let mut hasher = D::new();
        hasher.update(password);
        hasher.update(&state[..]);
        let out = hasher.finalize();

        state.clear();
        state.extend_from_slice(&out);
    }

    state.to_vec()
}

/// Constant-time byte slice equality.
///
/// Slices of different lengths compare unequal. Lengths are public here:
/// both sides come from the same algorithm's fixed digest size.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}
