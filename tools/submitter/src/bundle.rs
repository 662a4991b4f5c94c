//! Proof bundle loading.
//!
//! The proving service responds with `{success, data: {zkProof,
//! journalDataAbi}}`; some tooling persists just the inner pair. Both shapes
//! are accepted. Hex fields may carry a `0x` prefix.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SubmitError;

/// The `(seal, journal)` pair extracted from a proof bundle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofBundle {
    /// Opaque proof bytes, passed through to the verifier untouched.
    pub seal: Vec<u8>,
    /// Raw journal bytes exactly as the prover committed them.
    pub journal: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFields {
    #[serde(rename = "zkProof")]
    zk_proof: Option<String>,
    #[serde(rename = "journalDataAbi")]
    journal_data_abi: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: Option<bool>,
    data: Option<RawFields>,
    #[serde(flatten)]
    top: RawFields,
}

impl ProofBundle {
    /// Reads and parses a proof bundle file.
    pub fn load(path: &Path) -> Result<Self, SubmitError> {
        let text = fs::read_to_string(path)
            .map_err(|e| SubmitError::InvalidProofFile(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Parses a proof bundle from its JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SubmitError> {
        let envelope: Envelope = serde_json::from_str(text)
            .map_err(|e| SubmitError::InvalidProofFile(format!("not valid JSON: {e}")))?;
        if envelope.success == Some(false) {
            return Err(SubmitError::InvalidProofFile(
                "proving service reported failure".into(),
            ));
        }
        let fields = match envelope.data {
            Some(data) => data,
            None => envelope.top,
        };
        Ok(Self {
            seal: decode_hex_field("zkProof", fields.zk_proof)?,
            journal: decode_hex_field("journalDataAbi", fields.journal_data_abi)?,
        })
    }
}

fn decode_hex_field(name: &str, value: Option<String>) -> Result<Vec<u8>, SubmitError> {
    let value =
        value.ok_or_else(|| SubmitError::InvalidProofFile(format!("missing field `{name}`")))?;
    let stripped = value.strip_prefix("0x").unwrap_or(&value);
    hex::decode(stripped)
        .map_err(|e| SubmitError::InvalidProofFile(format!("field `{name}` is not hex: {e}")))
}
