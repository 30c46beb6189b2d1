// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{FixedBytes, U256},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use smartcar_tools::core::{
    artifact::ArtifactDir,
    deployment::DeploymentConfig,
    migration::{SmartCarMigration, DEFAULT_WARNING_PERIOD_SECS},
};

use crate::{
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_ENDPOINT},
    utils::{convert_gwei_to_wei, decode0x, parse_gwei},
};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding compiled contract artifacts (`<Name>.json`)
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts_dir: PathBuf,
}

impl ArtifactArgs {
    pub fn resolver(&self) -> ArtifactDir {
        ArtifactDir::new(&self.artifacts_dir)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_hex(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_hex(&key, chain_id);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!(
            "no wallet: pass --private-key, --private-key-path or --keystore-path"
        ))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())?
            .with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn deployment_config(&self) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig {
            max_fee_per_gas_wei: self.get_max_fee_per_gas_wei()?,
        })
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_hex(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct MigrationArgs {
    /// Rental price per second, in gwei
    #[arg(long, value_name = "GWEI", value_parser = parse_gwei, default_value = "1")]
    price_per_second_gwei: U256,
    /// Seconds a renter is warned before their rental runs out
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_WARNING_PERIOD_SECS)]
    warning_period: u64,
}

impl MigrationArgs {
    pub fn migration(&self) -> SmartCarMigration {
        SmartCarMigration::builder()
            .price_per_second(self.price_per_second_gwei)
            .warning_period_secs(self.warning_period)
            .build()
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the target chain
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use smartcar_tools::core::migration::default_price_per_second;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        migration: MigrationArgs,
        #[command(flatten)]
        artifacts: ArtifactArgs,
    }

    #[test]
    fn migration_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.migration.migration(), SmartCarMigration::default());
        assert_eq!(
            cli.migration.migration().price_per_second,
            default_price_per_second()
        );
        assert_eq!(
            cli.artifacts.resolver().root(),
            std::path::Path::new(DEFAULT_ARTIFACTS_DIR)
        );
    }

    #[test]
    fn migration_overrides() {
        let cli = Cli::parse_from([
            "test",
            "--price-per-second-gwei",
            "30",
            "--warning-period",
            "60",
        ]);
        let migration = cli.migration.migration();
        assert_eq!(migration.price_per_second, U256::from(30_000_000_000u64));
        assert_eq!(migration.warning_period_secs, 60);
    }

    #[test]
    fn rejects_negative_price() {
        assert!(Cli::try_parse_from(["test", "--price-per-second-gwei", "-1"]).is_err());
    }
}
