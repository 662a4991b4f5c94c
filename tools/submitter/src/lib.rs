//! Off-chain submission client for the balance registry.
//!
//! Turns a proof bundle produced by the proving service into a confirmed
//! ledger state change: load the bundle, decode the journal locally for
//! diagnostics, simulate the registry's state transition, submit the real
//! transaction only if simulation succeeded, wait for inclusion, and finally
//! re-read the committed balance from the ledger as an end-to-end consistency
//! check.
//!
//! The ledger itself is reached through the [`gateway::LedgerGateway`] trait;
//! RPC plumbing lives behind that seam and is not part of this crate.

pub mod bundle;
pub mod deployment;
pub mod error;
pub mod gateway;
pub mod run;

pub use bundle::ProofBundle;
pub use deployment::{DeploymentParameters, DeploymentRecord};
pub use error::{Phase, RejectionKind, SubmitError};
pub use gateway::{Confirmation, GatewayError, LedgerGateway, TxHandle};
pub use run::{SubmissionOutcome, submit_proof};
