//! Per-network deployment records.
//!
//! Written once by the deployment tooling after a registry instance is
//! created; read here only to locate the instance and echo its parameters.
//! Submissions never mutate these files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// The validation parameters a registry instance was constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentParameters {
    /// Address of the verifier contract.
    pub verifier_address: String,
    /// Guest program image id, hex.
    pub image_id: String,
    /// Trusted notary key fingerprint, hex.
    pub notary_key_fingerprint: String,
    /// Extraction-queries hash, hex.
    pub queries_hash: String,
    /// Required URL prefix.
    pub expected_url: String,
}

/// One deployed registry instance on one network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// Address of the registry contract.
    pub contract_address: String,
    /// Network identifier the record belongs to.
    pub chain_id: u64,
    /// Account that performed the deployment.
    pub deployer: String,
    /// Deployment transaction hash.
    pub transaction_hash: String,
    /// Ledger/block the deployment landed in.
    pub block_number: u64,
    /// Resources consumed by the deployment.
    pub gas_used: u64,
    /// When the deployment happened, as recorded by the tooling.
    pub timestamp: String,
    /// Constructor parameters the instance is locked to.
    pub parameters: DeploymentParameters,
}

impl DeploymentRecord {
    /// Reads and parses a deployment record file.
    pub fn load(path: &Path) -> Result<Self, SubmitError> {
        let text = fs::read_to_string(path).map_err(|e| {
            SubmitError::InvalidDeploymentRecord(format!("{}: {e}", path.display()))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| SubmitError::InvalidDeploymentRecord(format!("not valid JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "contractAddress": "CBXYZ",
        "chainId": 2008,
        "deployer": "GABCD",
        "transactionHash": "0x5ca1ab1e",
        "blockNumber": 4242,
        "gasUsed": 181000,
        "timestamp": "2026-08-01T12:00:00Z",
        "parameters": {
            "verifierAddress": "CVRF0",
            "imageId": "0x33",
            "notaryKeyFingerprint": "0x11",
            "queriesHash": "0x22",
            "expectedUrl": "https://api.example.com/v2"
        }
    }"#;

    #[test]
    fn parses_a_deployment_record() {
        let record: DeploymentRecord = serde_json::from_str(RECORD).expect("record");
        assert_eq!(record.contract_address, "CBXYZ");
        assert_eq!(record.block_number, 4242);
        assert_eq!(record.parameters.expected_url, "https://api.example.com/v2");
    }

    #[test]
    fn rejects_record_missing_parameters() {
        let err = DeploymentRecord::load(Path::new("/nonexistent/deployment.json"))
            .expect_err("missing file");
        assert!(matches!(err, SubmitError::InvalidDeploymentRecord(_)));
    }
}
