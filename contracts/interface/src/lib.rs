#![no_std]

extern crate alloc;

use soroban_sdk::{Env, contractclient};

// Re-export types at crate root for convenience
pub use types::{ImageId, JournalDigest, Seal};

pub mod journal;
pub mod types;

/// Verifier interface for zero-knowledge proofs of guest-program execution.
///
/// This is the trust boundary between the balance registry and the proof system:
/// the registry never inspects seals itself, it delegates to a contract
/// implementing this interface.
#[contractclient(name = "ProofVerifierClient")]
pub trait ProofVerifierInterface {
    /// Verifies that the given seal is a valid proof of execution of the guest
    /// program identified by `image_id`, committing a journal whose SHA-256
    /// digest is `journal`.
    ///
    /// The digest must be computed over the raw journal bytes exactly as the
    /// prover committed them; re-encoding a decoded journal does not qualify.
    ///
    /// # Parameters
    ///
    /// - `seal`: The encoded cryptographic proof (i.e. SNARK)
    /// - `image_id`: The identifier for the guest program
    /// - `journal`: The SHA-256 digest of the journal bytes
    ///
    /// # Panics
    ///
    /// Panics if the seal is invalid or verification fails.
    fn verify(env: Env, seal: Seal, image_id: ImageId, journal: JournalDigest);
}
