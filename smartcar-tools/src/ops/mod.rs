// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use deploy::{deploy, estimate_gas};
pub use initcode::write_initcode;

mod deploy;
mod initcode;
