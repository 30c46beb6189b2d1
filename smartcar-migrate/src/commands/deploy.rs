// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use smartcar_tools::ops;

use crate::{
    common_args::{ArtifactArgs, AuthArgs, MigrationArgs, ProviderArgs},
    error::MigrateResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// Write a JSON record of the deployment to this file.
    #[arg(long)]
    record: Option<PathBuf>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    migration: MigrationArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MigrateResult {
    let migration = args.migration.migration();
    let artifacts = args.artifacts.resolver();
    let config = args.auth.deployment_config()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    if args.estimate_gas {
        ops::estimate_gas(&migration, &artifacts, &config, provider).await?;
    } else {
        ops::deploy(
            &migration,
            &artifacts,
            &config,
            provider,
            args.record.as_deref(),
        )
        .await?;
    }
    Ok(())
}
