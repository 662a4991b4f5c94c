#![no_std]

use soroban_sdk::{Env, contract, contractimpl};
use verifier_interface::{ImageId, JournalDigest, ProofVerifierInterface, Seal};

mod test;

/// Seals whose first byte equals this marker are rejected.
pub const POISON_BYTE: u8 = 0xFF;

/// Deterministic stand-in for a real proof verifier, for tests and local
/// deployments.
///
/// Accepts any non-empty seal that does not start with [`POISON_BYTE`]. This
/// gives callers a pass/fail lever without any cryptography; it provides no
/// security whatsoever.
#[contract]
pub struct MockVerifier;

#[contractimpl]
impl ProofVerifierInterface for MockVerifier {
    fn verify(_env: Env, seal: Seal, _image_id: ImageId, _journal: JournalDigest) {
        if seal.is_empty() {
            panic!("empty seal");
        }
        if seal.get(0) == Some(POISON_BYTE) {
            panic!("poisoned seal");
        }
    }
}
