// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment of the `SmartCar` contract.

use alloy::primitives::{utils::Unit, U256};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{ArtifactError, ArtifactResolver},
        deployment::{Deployer, Deployment, DeploymentError},
    },
    utils::{color::DebugColor, format_gwei},
};

/// Name the contract artifact is resolved by.
pub const CONTRACT_NAME: &str = "SmartCar";

/// Seconds a renter is warned before their paid time runs out.
pub const DEFAULT_WARNING_PERIOD_SECS: u64 = 30;

/// Rental price per second: one gwei, in wei.
pub fn default_price_per_second() -> U256 {
    Unit::GWEI.wei()
}

/// Constructor configuration for a `SmartCar` deployment.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SmartCarMigration {
    /// Rental price per second, in wei.
    #[builder(default = default_price_per_second())]
    pub price_per_second: U256,
    /// Warning period before rental expiry, in seconds.
    #[builder(default = DEFAULT_WARNING_PERIOD_SECS)]
    pub warning_period_secs: u64,
}

impl Default for SmartCarMigration {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

impl SmartCarMigration {
    /// Constructor arguments, in declaration order.
    pub fn constructor_args(&self) -> Vec<String> {
        vec![
            self.price_per_second.to_string(),
            self.warning_period_secs.to_string(),
        ]
    }

    /// Resolves the `SmartCar` artifact and deploys it once.
    ///
    /// No retries: any error from `deployer` is returned as is.
    pub async fn run(
        &self,
        artifacts: &impl ArtifactResolver,
        deployer: &impl Deployer,
    ) -> Result<Deployment, MigrationError> {
        let artifact = artifacts.resolve(CONTRACT_NAME)?;
        info!(
            @grey,
            "deploying {CONTRACT_NAME}: price per second {}, warning period {}s",
            format_gwei(self.price_per_second),
            self.warning_period_secs
        );
        let deployment = deployer
            .deploy(&artifact, &self.constructor_args())
            .await?;
        info!(@grey, "deployed code at address: {}", deployment.address.debug_lavender());
        info!(@grey, "deployment tx hash: {}", deployment.tx_hash.debug_lavender());
        Ok(deployment)
    }
}
