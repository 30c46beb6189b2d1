// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::{DeploymentError, GasEstimate};
use crate::utils::color::DebugColor;

/// Contract creation transaction request, carrying initcode as its input.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(
        sender: Address,
        initcode: impl Into<Bytes>,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(initcode),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate(&self, provider: &impl Provider) -> Result<GasEstimate, DeploymentError> {
        let gas = provider.estimate_gas(self.tx.clone()).await?;
        let fee_per_gas = self.fee_per_gas(provider).await?;
        Ok(GasEstimate { gas, fee_per_gas })
    }

    pub async fn exec(
        self,
        estimate: GasEstimate,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let mut tx = self.tx;
        tx.gas = Some(estimate.gas);
        tx.max_fee_per_gas = Some(estimate.fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        tx.get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}
