//! The seam between the submission flow and the ledger.
//!
//! RPC plumbing (transaction assembly, signing, polling) is deliberately out
//! of scope for this crate; production wiring and test doubles both attach
//! here. Implementations must suspend while awaiting inclusion rather than
//! busy-poll, and must not report [`GatewayError::Timeout`] before the
//! caller's window has elapsed.

use std::time::Duration;

use thiserror::Error;

/// Handle to a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxHandle(pub String);

/// Proof of inclusion in a closed ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// The ledger sequence the transaction was applied in.
    pub ledger_sequence: u32,
}

/// Failures surfaced by a gateway, prior to client-side classification.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The contract invocation aborted. `code` carries the contract error
    /// code when one could be extracted from the host failure; traps and
    /// other faults leave it empty.
    #[error("contract invocation rejected: {payload}")]
    ContractRevert {
        /// Contract error code, if the failure carried one.
        code: Option<u32>,
        /// Raw failure payload for diagnostics.
        payload: String,
    },
    /// An RPC-level fault (connection, serialization, node error).
    #[error("rpc failure: {0}")]
    Network(String),
    /// The awaited event did not happen within the caller's window.
    #[error("timed out")]
    Timeout,
}

/// Ledger access as the submission flow needs it: one dry run, one real
/// transaction, one inclusion wait, one authoritative read-back.
pub trait LedgerGateway {
    /// Executes the registry's transition function against current ledger
    /// state without mutating it, as the submitting identity.
    fn simulate_submission(&self, journal: &[u8], seal: &[u8]) -> Result<(), GatewayError>;

    /// Sends the real state-mutating transaction with identical arguments.
    fn submit_transaction(&self, journal: &[u8], seal: &[u8]) -> Result<TxHandle, GatewayError>;

    /// Suspends until the transaction is included, or `timeout` elapses.
    fn await_inclusion(
        &self,
        tx: &TxHandle,
        timeout: Duration,
    ) -> Result<Confirmation, GatewayError>;

    /// Reads the registry's persisted balance via a read-only query.
    fn read_balance(&self) -> Result<String, GatewayError>;
}
