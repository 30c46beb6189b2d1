// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use eyre::Context;
use smartcar_tools::{ops, utils::file_or_stdout};

use crate::{
    common_args::{ArtifactArgs, MigrationArgs},
    error::MigrateResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The output file - text file to store generated hex code.
    /// (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    migration: MigrationArgs,
}

pub fn exec(args: Args) -> MigrateResult {
    let writer = file_or_stdout(args.output.as_ref()).wrap_err("failed to create output file")?;
    ops::write_initcode(&args.migration.migration(), &args.artifacts.resolver(), writer)?;
    Ok(())
}
