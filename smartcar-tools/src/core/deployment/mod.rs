// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionReceipt,
};

use crate::{
    core::artifact::Artifact,
    utils::{
        color::{Color, DebugColor},
        format_fee,
    },
};
use request::DeploymentRequest;

pub mod request;

#[derive(Debug, Default, Clone)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
}

/// A contract that made it on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

impl Deployment {
    /// Reads the outcome of a mined creation transaction.
    pub fn from_receipt(receipt: &TransactionReceipt) -> Result<Self, DeploymentError> {
        let tx_hash = receipt.transaction_hash;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress("in receipt".to_string()))?;
        Ok(Self {
            address,
            tx_hash,
            gas_used: receipt.gas_used,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    pub fee_per_gas: u128,
}

impl GasEstimate {
    /// Upper bound on what the deployment costs the sender.
    pub fn fee(&self) -> U256 {
        U256::from(self.gas) * U256::from(self.fee_per_gas)
    }
}

/// Submits contract-creation transactions.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Deploys `artifact` with the given constructor arguments, resolving once the
    /// creation transaction is mined.
    async fn deploy(
        &self,
        artifact: &Artifact,
        args: &[String],
    ) -> Result<Deployment, DeploymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to pay for deployment\n\
         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .fee).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        fee: U256,
    },
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing address: {0}")]
    NoContractAddress(String),
}

/// Builds the creation code for `artifact`: its bytecode followed by the ABI-encoded
/// constructor arguments.
///
/// Arguments are given as strings and coerced to the types of the constructor's inputs.
pub fn encode_constructor(artifact: &Artifact, args: &[String]) -> Result<Vec<u8>, DeploymentError> {
    let mut code = artifact.bytecode.to_vec();
    let Some(constructor) = artifact.constructor() else {
        if !args.is_empty() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "{} has no constructor but {} arguments were given",
                artifact.name,
                args.len(),
            )));
        }
        return Ok(code);
    };
    if args.len() != constructor.inputs.len() {
        return Err(DeploymentError::InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(|param| param.ty.as_str())
                .collect::<Vec<_>>(),
            constructor.inputs.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not resolve constructor arg {param}: {err}"
            ))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not parse constructor arg {param} from {arg:?}: {err}"
            ))
        })?;
        values.push(value);
    }

    let encoded = constructor
        .abi_encode_input(&values)
        .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
    code.extend(encoded);
    Ok(code)
}

/// Deploys through an alloy provider that signs with its own wallet.
#[derive(Debug)]
pub struct ProviderDeployer<P> {
    provider: P,
    config: DeploymentConfig,
}

impl<P: Provider + WalletProvider> ProviderDeployer<P> {
    pub fn new(provider: P, config: DeploymentConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Estimates gas and fee per gas for deploying `artifact`, without sending anything.
    pub async fn estimate(
        &self,
        artifact: &Artifact,
        args: &[String],
    ) -> Result<GasEstimate, DeploymentError> {
        self.request(artifact, args)?.estimate(&self.provider).await
    }

    fn request(
        &self,
        artifact: &Artifact,
        args: &[String],
    ) -> Result<DeploymentRequest, DeploymentError> {
        let initcode = encode_constructor(artifact, args)?;
        Ok(DeploymentRequest::new(
            self.provider.default_signer_address(),
            initcode,
            self.config.max_fee_per_gas_wei,
        ))
    }
}

impl<P: Provider + WalletProvider> Deployer for ProviderDeployer<P> {
    async fn deploy(
        &self,
        artifact: &Artifact,
        args: &[String],
    ) -> Result<Deployment, DeploymentError> {
        let from_address = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", from_address.debug_lavender());

        let req = self.request(artifact, args)?;
        let estimate = req.estimate(&self.provider).await?;
        let fee = estimate.fee();
        debug!(@grey, "estimated gas: {}, max fee: {}", estimate.gas, format_fee(fee));

        let balance = self
            .provider
            .get_balance(from_address)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        if balance < fee {
            return Err(DeploymentError::NotEnoughFunds {
                from_address,
                balance,
                fee,
            });
        }

        let receipt = req.exec(estimate, &self.provider).await?;
        Deployment::from_receipt(&receipt)
    }
}
