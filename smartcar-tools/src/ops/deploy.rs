// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::path::Path;

use alloy::{
    primitives::utils::format_units,
    providers::{Provider, WalletProvider},
};

use crate::{
    core::{
        artifact::ArtifactResolver,
        deployment::{Deployment, DeploymentConfig, ProviderDeployer},
        migration::{SmartCarMigration, CONTRACT_NAME},
        record::DeploymentRecord,
    },
    utils::color::DebugColor,
};

/// Deploys `SmartCar` through `provider`, optionally saving a record of the deployment.
///
/// The chain id for the record is looked up before anything is sent, so once the
/// contract is on chain only writing the file can fail.
pub async fn deploy(
    migration: &SmartCarMigration,
    artifacts: &impl ArtifactResolver,
    config: &DeploymentConfig,
    provider: impl Provider + WalletProvider,
    record: Option<&Path>,
) -> eyre::Result<Deployment> {
    let record = match record {
        Some(path) => Some((path, provider.get_chain_id().await?)),
        None => None,
    };

    let deployer = ProviderDeployer::new(provider, config.clone());
    let deployment = migration.run(artifacts, &deployer).await?;
    debug!(@grey, "gas used: {}", deployment.gas_used);

    if let Some((path, chain_id)) = record {
        save_record(migration, &deployment, chain_id, path)?;
    }

    mintln!("deployed {} at {}", CONTRACT_NAME, deployment.address);
    Ok(deployment)
}

fn save_record(
    migration: &SmartCarMigration,
    deployment: &Deployment,
    chain_id: u64,
    path: &Path,
) -> eyre::Result<()> {
    let record = DeploymentRecord::new(
        CONTRACT_NAME,
        chain_id,
        deployment,
        migration.constructor_args(),
    );
    if let Err(err) = record.save(path) {
        warn!(@yellow,
            "deployed {} at {} (tx {}) but could not write {}",
            CONTRACT_NAME,
            deployment.address,
            deployment.tx_hash,
            path.display()
        );
        return Err(err.into());
    }
    info!(@grey, "wrote deployment record to {}", path.display());
    Ok(())
}

/// Prints the gas and cost estimate of deploying `SmartCar` without sending anything.
pub async fn estimate_gas(
    migration: &SmartCarMigration,
    artifacts: &impl ArtifactResolver,
    config: &DeploymentConfig,
    provider: impl Provider + WalletProvider,
) -> eyre::Result<()> {
    let artifact = artifacts.resolve(CONTRACT_NAME)?;
    let deployer = ProviderDeployer::new(provider, config.clone());
    let estimate = deployer
        .estimate(&artifact, &migration.constructor_args())
        .await?;

    greyln!("estimates");
    greyln!("deployment tx gas: {}", estimate.gas.debug_lavender());
    greyln!(
        "gas price: {} gwei",
        format_units(estimate.fee_per_gas, "gwei")?.debug_lavender()
    );
    greyln!(
        "deployment tx total cost: {} ETH",
        format_units(estimate.fee(), "ether")?.debug_lavender()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fs};

    use alloy::{
        network::EthereumWallet,
        primitives::{address, b256, U128, U256, U64},
        providers::{mock::Asserter, ProviderBuilder},
        signers::local::PrivateKeySigner,
    };

    use super::*;
    use crate::core::{
        artifact::{Artifact, ArtifactError},
        deployment::DeploymentError,
        migration::MigrationError,
    };

    const SIGNER_KEY: &str = "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

    #[derive(Default)]
    struct CountingArtifacts {
        resolved: Cell<usize>,
    }

    impl ArtifactResolver for CountingArtifacts {
        fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError> {
            self.resolved.set(self.resolved.get() + 1);
            Ok(Artifact::from_json(
                name,
                r#"{"abi": [{"type": "constructor", "stateMutability": "nonpayable", "inputs": [
                    {"name": "_pricePerSecond", "type": "uint256"},
                    {"name": "_warningPeriod", "type": "uint256"}
                ]}], "bytecode": "0x6080604052"}"#,
            )
            .unwrap())
        }
    }

    fn provider(asserter: &Asserter) -> impl Provider + WalletProvider {
        let signer: PrivateKeySigner = SIGNER_KEY.parse().unwrap();
        ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_mocked_client(asserter.clone())
    }

    fn deployment() -> Deployment {
        Deployment {
            address: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            tx_hash: b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
            gas_used: 250_000,
        }
    }

    #[tokio::test]
    async fn chain_id_failure_sends_nothing() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("method not found");
        let artifacts = CountingArtifacts::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SmartCar.json");

        let result = deploy(
            &SmartCarMigration::default(),
            &artifacts,
            &DeploymentConfig::default(),
            provider(&asserter),
            Some(&path),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(artifacts.resolved.get(), 0);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn deploy_failure_writes_no_record() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(1337));
        asserter.push_success(&U64::from(100_000));
        asserter.push_success(&U128::from(1_000_000_000u64));
        asserter.push_success(&U256::from(1));
        let artifacts = CountingArtifacts::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SmartCar.json");

        let err = deploy(
            &SmartCarMigration::default(),
            &artifacts,
            &DeploymentConfig::default(),
            provider(&asserter),
            Some(&path),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MigrationError>(),
            Some(MigrationError::Deployment(DeploymentError::NotEnoughFunds { .. }))
        ));
        assert_eq!(artifacts.resolved.get(), 1);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn estimate_gas_only_queries() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(100_000));
        asserter.push_success(&U128::from(1_000_000_000u64));

        estimate_gas(
            &SmartCarMigration::default(),
            &CountingArtifacts::default(),
            &DeploymentConfig::default(),
            provider(&asserter),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn estimate_gas_failure() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted");

        let err = estimate_gas(
            &SmartCarMigration::default(),
            &CountingArtifacts::default(),
            &DeploymentConfig::default(),
            provider(&asserter),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeploymentError>(),
            Some(DeploymentError::Rpc(_))
        ));
    }

    #[test]
    fn record_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SmartCar.1337.json");
        save_record(&SmartCarMigration::default(), &deployment(), 1337, &path).unwrap();

        let record: DeploymentRecord =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            record,
            DeploymentRecord {
                contract_name: "SmartCar".into(),
                chain_id: 1337,
                address: deployment().address,
                transaction_hash: deployment().tx_hash,
                gas_used: 250_000,
                constructor_args: vec!["1000000000".into(), "30".into()],
            }
        );
    }

    #[test]
    fn record_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("SmartCar.json");
        assert!(save_record(&SmartCarMigration::default(), &deployment(), 1337, &path).is_err());
    }
}
