//! Textual encoding of CODVN H records (RFC2307 style).
//!
//! ```text
//! {x-is<TAG>,<ITER>}<BASE64>
//! ```
//!
//! - `<TAG>` is one of `sha`, `SHA256`, `SHA384`, `SHA512`
//! - `<ITER>` is a positive decimal iteration count
//! - `<BASE64>` is standard padded base64 of `digest || salt`
//!
//! Decoding tolerates spaces after the comma (`{x-issha, 1024}`), which some
//! issuing systems emit. Encoding never emits them, so canonical text is the
//! compact form and round-trips exactly.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::sync::OnceLock;

use crate::algorithm::HashAlgorithm;
use crate::error::{CodvnError, Result};
use crate::record::Record;

/// Scheme prefix shared by every record.
pub const SCHEME_PREFIX: &str = "{x-is";

/// Whole-string pattern: tag, raw iteration field, base64 payload.
///
/// The iteration field is captured loosely so that a bad count is reported
/// as such rather than as a pattern mismatch.
fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\{x-is([[:alnum:]]+), *([^}]*)\}(.*)$").expect("record pattern is valid")
    })
}

/// Decode a record from its text form.
pub fn decode(text: &str) -> Result<Record> {
    let caps = record_pattern()
        .captures(text)
        .ok_or(CodvnError::UnknownHashKind)?;

    let algorithm = HashAlgorithm::from_tag(&caps[1]).ok_or(CodvnError::UnknownHashKind)?;
    let iterations = parse_iterations(&caps[2])?;
    let payload = STANDARD.decode(&caps[3])?;

    Record::from_payload(algorithm, iterations, &payload)
}

/// Encode a record to canonical text.
pub fn encode(record: &Record) -> String {
    format!(
        "{}{},{}}}{}",
        SCHEME_PREFIX,
        record.algorithm().tag(),
        record.iterations(),
        STANDARD.encode(record.payload())
    )
}

/// Parse the iteration field: ASCII digits only, non-zero, fits in `u32`.
fn parse_iterations(raw: &str) -> Result<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodvnError::InvalidIterationCount);
    }

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(CodvnError::InvalidIterationCount),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SHA1_VECTOR: &str = "{x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=";

    #[test]
    fn test_decode_sha1_vector() {
        let record = decode(SHA1_VECTOR).unwrap();
        assert_eq!(record.algorithm(), HashAlgorithm::Sha1);
        assert_eq!(record.iterations(), 1024);
        assert_eq!(record.digest().len(), 20);
        assert_eq!(record.salt().len(), 12);
    }

    #[test]
    fn test_canonical_roundtrip() {
        let record = decode(SHA1_VECTOR).unwrap();
        assert_eq!(encode(&record), SHA1_VECTOR);
    }

    #[test]
    fn test_space_after_comma_tolerated() {
        let spaced = "{x-issha, 1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=";
        let record = decode(spaced).unwrap();
        assert_eq!(record, decode(SHA1_VECTOR).unwrap());
        // Never emitted.
        assert_eq!(encode(&record), SHA1_VECTOR);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            decode("{x-ismd5,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g="),
            Err(CodvnError::UnknownHashKind)
        );
    }

    #[test]
    fn test_structural_mismatch_is_unknown_kind() {
        let cases = [
            "",
            "IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{SSHA}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha 1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,1024IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            " {x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=\n",
            "{x-is,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
        ];
        for case in cases {
            assert_eq!(decode(case), Err(CodvnError::UnknownHashKind), "{case:?}");
        }
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert_eq!(
            decode("{x-issha,0}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g="),
            Err(CodvnError::InvalidIterationCount)
        );
        assert_eq!(
            decode("{x-issha,000}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g="),
            Err(CodvnError::InvalidIterationCount)
        );
    }

    #[test]
    fn test_bad_iteration_field() {
        let cases = [
            "{x-issha,}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,abc}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,-5}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,+5}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,10 24}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,99999999999}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
        ];
        for case in cases {
            assert_eq!(
                decode(case),
                Err(CodvnError::InvalidIterationCount),
                "{case:?}"
            );
        }
    }

    #[test]
    fn test_truncated_payload() {
        assert_eq!(
            decode("{x-issha,1024}Cg=="),
            Err(CodvnError::TruncatedInput {
                expected: 20,
                actual: 1
            })
        );
        assert_eq!(
            decode("{x-isSHA256,1}"),
            Err(CodvnError::TruncatedInput {
                expected: 32,
                actual: 0
            })
        );
    }

    #[test]
    fn test_malformed_base64() {
        let cases = [
            "{x-issha,1024}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g",
            "{x-issha,1024}IlU5JC/UaAzvUl8n*axIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,1024}IlU5JC_UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
            "{x-issha,1024}IlU5 JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
        ];
        for case in cases {
            assert!(
                matches!(decode(case), Err(CodvnError::MalformedEncoding(_))),
                "{case:?}"
            );
        }
    }

    #[test]
    fn test_encode_has_no_whitespace() {
        let record = Record::construct(HashAlgorithm::Sha384, b"pw", b"salt", 7500).unwrap();
        let text = encode(&record);
        assert!(text.starts_with("{x-isSHA384,7500}"));
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_encode_decode_constructed() {
        for alg in HashAlgorithm::ALL {
            let record = Record::construct(alg, b"pw", b"0123456789abcdef", 3).unwrap();
            let text = encode(&record);
            let decoded = decode(&text).unwrap();
            assert_eq!(decoded, record);
            assert_eq!(encode(&decoded), text);
        }
    }

    proptest! {
        #[test]
        fn test_encoded_payload_roundtrips(
            tag_idx in 0usize..4,
            iterations in 1u32..=u32::MAX,
            salt in prop::collection::vec(any::<u8>(), 0..40),
        ) {
            let alg = HashAlgorithm::ALL[tag_idx];
            let mut payload = vec![0xa5u8; alg.digest_len()];
            payload.extend_from_slice(&salt);

            let record = Record::from_payload(alg, iterations, &payload).unwrap();
            let text = encode(&record);
            prop_assert!(!text.chars().any(char::is_whitespace));
            prop_assert_eq!(decode(&text).unwrap(), record);
        }

        #[test]
        fn test_spaces_after_comma_ignored(spaces in 0usize..8) {
            let text = format!(
                "{{x-issha,{}1024}}IlU5JC/UaAzvUl8ncaxIBlFQ1Nfd0C5YxkizRFg970g=",
                " ".repeat(spaces)
            );
            prop_assert_eq!(encode(&decode(&text).unwrap()), SHA1_VECTOR);
        }
    }
}
