// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::MigrateResult;

mod deploy;
mod get_initcode;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the SmartCar contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Generate and print initcode for the SmartCar contract
    #[clap(visible_alias = "e")]
    GetInitcode(get_initcode::Args),
}

pub async fn exec(cmd: Command) -> MigrateResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::GetInitcode(args) => get_initcode::exec(args),
    }
}
