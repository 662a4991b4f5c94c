//! Client-side failure taxonomy, layered on top of the registry's error codes.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The five rejection conditions the registry can abort with, as decoded from
/// a simulation or transaction failure. Codes mirror the contract's error
/// enum and must stay in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Journal notary key fingerprint does not match the deployment.
    InvalidNotaryKeyFingerprint,
    /// Request method was not `GET`, or the URL prefix did not match.
    InvalidUrl,
    /// Journal queries hash does not match the deployment.
    InvalidQueriesHash,
    /// Extracted balance was empty.
    InvalidBalance,
    /// The verifier rejected the seal.
    ZkProofVerificationFailed,
}

impl RejectionKind {
    /// Decodes a contract error code; `None` for codes outside the taxonomy.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidNotaryKeyFingerprint),
            2 => Some(Self::InvalidUrl),
            3 => Some(Self::InvalidQueriesHash),
            4 => Some(Self::InvalidBalance),
            5 => Some(Self::ZkProofVerificationFailed),
            _ => None,
        }
    }

    /// The contract error code for this kind.
    pub fn code(self) -> u32 {
        match self {
            Self::InvalidNotaryKeyFingerprint => 1,
            Self::InvalidUrl => 2,
            Self::InvalidQueriesHash => 3,
            Self::InvalidBalance => 4,
            Self::ZkProofVerificationFailed => 5,
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::InvalidNotaryKeyFingerprint => {
                "InvalidNotaryKeyFingerprint: notary key fingerprint does not match the deployment"
            }
            Self::InvalidUrl => {
                "InvalidUrl: method was not GET, or the URL does not start with the expected prefix"
            }
            Self::InvalidQueriesHash => {
                "InvalidQueriesHash: extraction-queries hash does not match the deployment"
            }
            Self::InvalidBalance => "InvalidBalance: extracted balance is empty",
            Self::ZkProofVerificationFailed => {
                "ZKProofVerificationFailed: the verifier rejected the seal"
            }
        };
        f.write_str(message)
    }
}

/// Which step of the submission flow a rejection was observed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The read-only dry run against current ledger state.
    Simulate,
    /// The real state-mutating transaction.
    Submit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulate => f.write_str("simulation"),
            Self::Submit => f.write_str("submission"),
        }
    }
}

/// Everything that can go wrong during one submission attempt. All variants
/// are terminal for the attempt; there are no automatic retries.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The proof bundle file is missing, unreadable, or malformed.
    #[error("invalid proof bundle: {0}")]
    InvalidProofFile(String),
    /// The deployment record file is missing, unreadable, or malformed.
    #[error("invalid deployment record: {0}")]
    InvalidDeploymentRecord(String),
    /// The registry rejected the submission with a known condition.
    #[error("{phase} rejected by the registry: {kind}")]
    ValidationRejected {
        /// The decoded rejection condition.
        kind: RejectionKind,
        /// Where the rejection was observed.
        phase: Phase,
    },
    /// The invocation aborted with a payload outside the known taxonomy.
    #[error("{phase} aborted with unrecognized payload: {payload}")]
    UnrecognizedRevert {
        /// Where the abort was observed.
        phase: Phase,
        /// The raw abort payload, for manual inspection.
        payload: String,
    },
    /// The transaction was not observed in a closed ledger within the
    /// configured window. This does not imply the submission was rejected.
    #[error("transaction not confirmed within {timeout:?}")]
    ConfirmationTimeout {
        /// The window that elapsed.
        timeout: Duration,
    },
    /// An RPC-level fault unrelated to validation.
    #[error("network failure: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_the_taxonomy() {
        for code in 1..=5 {
            let kind = RejectionKind::from_code(code).expect("known code");
            assert_eq!(kind.code(), code);
        }
        assert_eq!(RejectionKind::from_code(0), None);
        assert_eq!(RejectionKind::from_code(6), None);
    }
}
