#![no_std]

// Use Soroban's allocator for heap allocations
extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use soroban_sdk::{
    Address, Bytes, BytesN, Env, String, contract, contracterror, contractevent, contractimpl,
    contracttype,
};
use verifier_interface::{ImageId, ProofVerifierClient, Seal, journal};


/// Conditions under which a submission is rejected.
///
/// The discriminants are a wire contract: off-chain tooling decodes them from
/// simulation and transaction failures. Do not renumber.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The journal's notary key fingerprint does not match the deployment.
    InvalidNotaryKeyFingerprint = 1,
    /// The request method is not `GET`, or the URL does not start with the
    /// expected prefix.
    InvalidUrl = 2,
    /// The journal's extraction-queries hash does not match the deployment.
    InvalidQueriesHash = 3,
    /// The extracted balance is empty.
    InvalidBalance = 4,
    /// The verifier rejected the seal, or faulted while checking it.
    ZKProofVerificationFailed = 5,
}

/// Immutable deployment parameters, written once by the constructor.
#[contracttype]
#[derive(Clone)]
pub struct Config {
    /// Address of the contract implementing the verifier interface.
    pub verifier: Address,
    /// Identity of the guest program whose proofs are accepted.
    pub image_id: ImageId,
    /// Fingerprint of the trusted notary key.
    pub notary_key_fingerprint: BytesN<32>,
    /// Commitment to the extraction query set.
    pub queries_hash: BytesN<32>,
    /// Required URL prefix; suffixes (e.g. appended API keys) are allowed.
    pub expected_url: String,
}

#[contracttype]
enum DataKey {
    Config,
    Balance,
}

/// Emitted once per accepted submission.
///
/// Published with the single topic `balance_updated` and the fields below as
/// a vector, in declaration order.
#[contractevent(topics = ["balance_updated"], data_format = "vec")]
pub struct BalanceUpdated {
    /// The newly committed balance.
    pub balance: String,
    /// The notarized request URL from the journal.
    pub url: String,
    /// The notarized session timestamp from the journal.
    pub timestamp: u64,
    /// Ledger sequence at which the submission was applied.
    pub ledger_sequence: u32,
}

/// Registry holding the latest proven balance for one configured API lookup.
///
/// `submit_balance` is callable by anyone; trust derives entirely from proof
/// validity, not from caller identity. The persisted value is a single slot
/// that each accepted submission overwrites.
#[contract]
pub struct BalanceRegistry;

#[contractimpl]
impl BalanceRegistry {
    /// Initializes the registry with its immutable validation parameters and
    /// an empty balance slot.
    pub fn __constructor(
        env: Env,
        verifier: Address,
        image_id: ImageId,
        notary_key_fingerprint: BytesN<32>,
        queries_hash: BytesN<32>,
        expected_url: String,
    ) {
        let config = Config {
            verifier,
            image_id,
            notary_key_fingerprint,
            queries_hash,
            expected_url,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage()
            .instance()
            .set(&DataKey::Balance, &String::from_str(&env, ""));
    }

    /// Validates a `(journal, seal)` pair and, if every check passes, commits
    /// the extracted balance and emits a [`BalanceUpdated`] event.
    ///
    /// Checks run in a fixed order, cheapest first, and the expensive
    /// delegated proof verification runs only once every local check holds:
    ///
    /// 1. the journal decodes as the six-field tuple (malformed input traps);
    /// 2. the notary key fingerprint matches the deployment;
    /// 3. the method is exactly `GET`;
    /// 4. the queries hash matches the deployment;
    /// 5. the URL starts with the expected prefix, byte for byte;
    /// 6. the extracted balance is non-empty;
    /// 7. the verifier accepts `(seal, image_id, sha256(journal_data))`.
    ///
    /// The digest in step 7 is computed over the raw `journal_data` bytes as
    /// received, binding the proof to the exact encoding the prover committed.
    /// No state is written on any failure path.
    pub fn submit_balance(env: Env, journal_data: Bytes, seal: Seal) -> Result<(), Error> {
        let config: Config = env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .expect("config is set by the constructor");

        let raw = bytes_to_vec(&journal_data);
        let journal = match journal::decode(&raw) {
            Ok(journal) => journal,
            Err(_) => panic!("malformed journal encoding"),
        };

        if journal.notary_key_fingerprint != config.notary_key_fingerprint.to_array() {
            return Err(Error::InvalidNotaryKeyFingerprint);
        }
        // Method validation shares the URL error class; off-chain decoding
        // relies on the merged condition.
        if journal.method != "GET" {
            return Err(Error::InvalidUrl);
        }
        if journal.queries_hash != config.queries_hash.to_array() {
            return Err(Error::InvalidQueriesHash);
        }
        let expected_url = string_to_vec(&config.expected_url);
        let url = journal.url.as_bytes();
        if url.len() < expected_url.len() || url[..expected_url.len()] != expected_url[..] {
            return Err(Error::InvalidUrl);
        }
        if journal.extracted_balance.is_empty() {
            return Err(Error::InvalidBalance);
        }

        let digest = env.crypto().sha256(&journal_data).to_bytes();
        let verifier = ProofVerifierClient::new(&env, &config.verifier);
        // Contract errors and traps from the verifier collapse uniformly; the
        // underlying cause is not surfaced across this trust boundary.
        match verifier.try_verify(&seal, &config.image_id, &digest) {
            Ok(Ok(())) => (),
            _ => return Err(Error::ZKProofVerificationFailed),
        }

        let balance = String::from_str(&env, &journal.extracted_balance);
        env.storage().instance().set(&DataKey::Balance, &balance);
        BalanceUpdated {
            balance,
            url: String::from_str(&env, &journal.url),
            timestamp: journal.timestamp,
            ledger_sequence: env.ledger().sequence(),
        }
        .publish(&env);
        Ok(())
    }

    /// Returns the currently persisted balance; empty until the first
    /// accepted submission.
    pub fn balance(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Balance)
            .expect("balance slot is set by the constructor")
    }
}

fn bytes_to_vec(bytes: &Bytes) -> Vec<u8> {
    let mut buf = vec![0u8; bytes.len() as usize];
    bytes.copy_into_slice(&mut buf);
    buf
}

fn string_to_vec(string: &String) -> Vec<u8> {
    let mut buf = vec![0u8; string.len() as usize];
    string.copy_into_slice(&mut buf);
    buf
}
