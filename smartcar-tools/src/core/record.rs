// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! On-disk record of a finished deployment.

use std::{fs, path::Path};

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::{core::deployment::Deployment, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub chain_id: u64,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub gas_used: u64,
    pub constructor_args: Vec<String>,
}

impl DeploymentRecord {
    pub fn new(
        contract_name: impl Into<String>,
        chain_id: u64,
        deployment: &Deployment,
        constructor_args: Vec<String>,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            chain_id,
            address: deployment.address,
            transaction_hash: deployment.tx_hash,
            gas_used: deployment.gas_used,
            constructor_args,
        }
    }

    /// Writes the record as pretty JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")?;
        Ok(())
    }
}
