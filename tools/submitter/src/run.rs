//! The submission flow: diagnose, simulate, submit, confirm, read back.

use std::time::Duration;

use sha2::{Digest as _, Sha256};
use tracing::{debug, info, warn};
use verifier_interface::journal;

use crate::bundle::ProofBundle;
use crate::error::{Phase, RejectionKind, SubmitError};
use crate::gateway::{Confirmation, GatewayError, LedgerGateway, TxHandle};

/// What a completed submission attempt produced.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// Handle of the applied transaction.
    pub tx: TxHandle,
    /// Inclusion information reported by the gateway.
    pub confirmation: Confirmation,
    /// The balance read back from the ledger after inclusion. This is ground
    /// truth re-derived from chain state, not the value the client submitted.
    pub confirmed_balance: String,
}

/// Drives one submission attempt end to end.
///
/// Simulation failures and submission failures are both terminal; a different
/// proof or corrected parameters require a fresh invocation. A confirmation
/// timeout is reported as [`SubmitError::ConfirmationTimeout`], never as a
/// validation failure: the transaction may still land later.
pub fn submit_proof<G: LedgerGateway>(
    gateway: &G,
    bundle: &ProofBundle,
    confirmation_timeout: Duration,
) -> Result<SubmissionOutcome, SubmitError> {
    log_journal_diagnostics(bundle);

    info!("simulating submission against current ledger state");
    gateway
        .simulate_submission(&bundle.journal, &bundle.seal)
        .map_err(|e| classify_abort(e, Phase::Simulate))?;

    info!("simulation succeeded, submitting transaction");
    let tx = gateway
        .submit_transaction(&bundle.journal, &bundle.seal)
        .map_err(|e| classify_abort(e, Phase::Submit))?;

    info!(tx = %tx.0, "transaction sent, awaiting inclusion");
    let confirmation = gateway
        .await_inclusion(&tx, confirmation_timeout)
        .map_err(|e| match e {
            GatewayError::Timeout => SubmitError::ConfirmationTimeout {
                timeout: confirmation_timeout,
            },
            // A revert observed at inclusion time is still a validation
            // outcome of the submitted transaction.
            revert @ GatewayError::ContractRevert { .. } => classify_abort(revert, Phase::Submit),
            GatewayError::Network(msg) => SubmitError::Network(msg),
        })?;

    // The transaction is already confirmed at this point, so a failure of the
    // read-back is an RPC fault, not a confirmation timeout and not a
    // validation outcome.
    let confirmed_balance = gateway.read_balance().map_err(|e| match e {
        GatewayError::Network(msg) => SubmitError::Network(msg),
        GatewayError::Timeout => {
            SubmitError::Network("timed out reading balance back after confirmation".into())
        }
        GatewayError::ContractRevert { payload, .. } => SubmitError::Network(payload),
    })?;

    info!(
        ledger = confirmation.ledger_sequence,
        balance = %confirmed_balance,
        "submission confirmed"
    );
    Ok(SubmissionOutcome {
        tx,
        confirmation,
        confirmed_balance,
    })
}

/// Maps a gateway failure to the client taxonomy: known contract error codes
/// become [`SubmitError::ValidationRejected`]; anything else that aborted the
/// invocation is surfaced with its raw payload rather than swallowed.
fn classify_abort(err: GatewayError, phase: Phase) -> SubmitError {
    match err {
        GatewayError::ContractRevert { code, payload } => {
            match code.and_then(RejectionKind::from_code) {
                Some(kind) => {
                    warn!(%phase, %kind, "registry rejected the submission");
                    SubmitError::ValidationRejected { kind, phase }
                }
                None => {
                    warn!(%phase, payload = %payload, "abort payload outside the known taxonomy");
                    SubmitError::UnrecognizedRevert { phase, payload }
                }
            }
        }
        GatewayError::Network(msg) => SubmitError::Network(msg),
        GatewayError::Timeout => SubmitError::Network(format!("timed out during {phase}")),
    }
}

/// Decodes the journal locally and logs its contents. Purely diagnostic: the
/// registry's own decoder is authoritative, so a local failure is logged and
/// the submission continues.
fn log_journal_diagnostics(bundle: &ProofBundle) {
    let digest = Sha256::digest(&bundle.journal);
    debug!(
        journal_digest = %hex::encode(digest),
        seal_len = bundle.seal.len(),
        "prepared proof bundle"
    );
    match journal::decode(&bundle.journal) {
        Ok(journal) => info!(
            method = %journal.method,
            url = %journal.url,
            timestamp = journal.timestamp,
            balance = %journal.extracted_balance,
            notary_key_fingerprint = %hex::encode(journal.notary_key_fingerprint),
            queries_hash = %hex::encode(journal.queries_hash),
            "decoded journal"
        ),
        Err(e) => warn!("journal did not decode locally ({e}); continuing, the registry decides"),
    }
}
