use soroban_sdk::{Bytes, BytesN};

/// Identifier for the proof-generating guest program (32 bytes).
pub type ImageId = BytesN<32>;

/// SHA-256 digest of the journal bytes (32 bytes).
pub type JournalDigest = BytesN<32>;

/// Encoded cryptographic proof (SNARK) as raw bytes.
pub type Seal = Bytes;
