//! Wire codec for the journal committed by the web-proof guest program.
//!
//! The journal is the Ethereum-ABI encoding of the six-field tuple
//! `(bytes32, string, string, uint256, bytes32, string)`, mapped in order to
//! `(notary_key_fingerprint, method, url, timestamp, queries_hash,
//! extracted_balance)`. This tuple shape is the wire contract shared by the
//! proving service, the submission client, and the registry contract; any
//! reordering or type change is a breaking change.
//!
//! Note that the proof itself is bound to the *raw encoded bytes*, not to the
//! decoded tuple: verification digests the bytes as received.

use alloc::{string::String, vec::Vec};
use alloy_primitives::{FixedBytes, U256};
use alloy_sol_types::{SolType, sol_data};

/// ABI schema of the journal tuple.
type JournalAbi = (
    sol_data::FixedBytes<32>,
    sol_data::String,
    sol_data::String,
    sol_data::Uint<256>,
    sol_data::FixedBytes<32>,
    sol_data::String,
);

/// Decoded journal contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    /// Identity of the notary key that attested the web session.
    pub notary_key_fingerprint: [u8; 32],
    /// HTTP method of the notarized request.
    pub method: String,
    /// Full request URL, including any query-string suffix.
    pub url: String,
    /// Unix timestamp of the notarized session.
    pub timestamp: u64,
    /// Commitment to the extraction query set applied to the response.
    pub queries_hash: [u8; 32],
    /// The balance string extracted from the API response.
    pub extracted_balance: String,
}

/// Reasons a byte payload fails to decode as a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalDecodeError {
    /// The payload is not a well-formed encoding of the six-field tuple.
    Malformed,
    /// The timestamp does not fit in 64 bits.
    TimestampOutOfRange,
}

impl core::fmt::Display for JournalDecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed journal encoding"),
            Self::TimestampOutOfRange => f.write_str("journal timestamp out of u64 range"),
        }
    }
}

impl core::error::Error for JournalDecodeError {}

/// Decodes raw journal bytes into a [`Journal`].
///
/// Decoding is strict: the payload must be exactly the six-field tuple in the
/// documented order and type sequence. Extra fields, missing fields, or
/// malformed offsets fail with [`JournalDecodeError::Malformed`].
pub fn decode(data: &[u8]) -> Result<Journal, JournalDecodeError> {
    let (fingerprint, method, url, timestamp, queries_hash, extracted_balance) =
        <JournalAbi as SolType>::abi_decode_params(data, true)
            .map_err(|_| JournalDecodeError::Malformed)?;

    let timestamp =
        u64::try_from(timestamp).map_err(|_| JournalDecodeError::TimestampOutOfRange)?;

    Ok(Journal {
        notary_key_fingerprint: fingerprint.0,
        method,
        url,
        timestamp,
        queries_hash: queries_hash.0,
        extracted_balance,
    })
}

/// Encodes a [`Journal`] into its wire form. Used by tests and tooling; the
/// proving service produces this encoding in production.
pub fn encode(journal: &Journal) -> Vec<u8> {
    <JournalAbi as SolType>::abi_encode_params(&(
        FixedBytes(journal.notary_key_fingerprint),
        journal.method.clone(),
        journal.url.clone(),
        U256::from(journal.timestamp),
        FixedBytes(journal.queries_hash),
        journal.extracted_balance.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn sample() -> Journal {
        Journal {
            notary_key_fingerprint: [0x11; 32],
            method: "GET".to_string(),
            url: "https://api.example.com/v2?x=1".to_string(),
            timestamp: 1_700_000_000,
            queries_hash: [0x22; 32],
            extracted_balance: "123.45".to_string(),
        }
    }

    #[test]
    fn decodes_what_the_prover_encodes() {
        let journal = sample();
        let decoded = decode(&encode(&journal)).expect("decode");
        assert_eq!(decoded, journal);
    }

    #[test]
    fn rejects_truncated_payload() {
        let mut bytes = encode(&sample());
        bytes.truncate(bytes.len() / 2);
        assert_eq!(decode(&bytes), Err(JournalDecodeError::Malformed));
    }

    #[test]
    fn rejects_payload_with_wrong_shape() {
        // A lone uint256 is well-formed ABI but not the journal tuple.
        let bytes = <sol_data::Uint<256> as SolType>::abi_encode(&U256::from(7u64));
        assert_eq!(decode(&bytes), Err(JournalDecodeError::Malformed));
    }

    #[test]
    fn rejects_oversized_timestamp() {
        let journal = sample();
        let bytes = <JournalAbi as SolType>::abi_encode_params(&(
            FixedBytes(journal.notary_key_fingerprint),
            journal.method,
            journal.url,
            U256::MAX,
            FixedBytes(journal.queries_hash),
            journal.extracted_balance,
        ));
        assert_eq!(decode(&bytes), Err(JournalDecodeError::TimestampOutOfRange));
    }

    #[test]
    fn empty_balance_is_representable() {
        // The codec does not police field values; the registry does.
        let mut journal = sample();
        journal.extracted_balance = String::new();
        let decoded = decode(&encode(&journal)).expect("decode");
        assert_eq!(decoded.extracted_balance, "");
    }
}
