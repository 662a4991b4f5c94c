#![cfg(test)]

use soroban_sdk::{Bytes, BytesN, Env};
use verifier_interface::ProofVerifierClient;

use super::*;

#[test]
fn accepts_benign_seal() {
    let env = Env::default();
    let contract_id = env.register(MockVerifier, ());
    let client = ProofVerifierClient::new(&env, &contract_id);

    let digest = BytesN::from_array(&env, &[0u8; 32]);
    client.verify(
        &Bytes::from_slice(&env, &[0xAA]),
        &BytesN::from_array(&env, &[0x33; 32]),
        &digest,
    );
}

#[test]
fn rejects_poisoned_and_empty_seals() {
    let env = Env::default();
    let contract_id = env.register(MockVerifier, ());
    let client = ProofVerifierClient::new(&env, &contract_id);

    let image_id = BytesN::from_array(&env, &[0x33; 32]);
    let digest = BytesN::from_array(&env, &[0u8; 32]);

    let poisoned = client.try_verify(
        &Bytes::from_slice(&env, &[POISON_BYTE, 0x01]),
        &image_id,
        &digest,
    );
    assert!(poisoned.is_err());

    let empty = client.try_verify(&Bytes::from_slice(&env, &[]), &image_id, &digest);
    assert!(empty.is_err());
}
