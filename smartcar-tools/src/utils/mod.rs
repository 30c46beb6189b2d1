// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::{fs, io, path::Path};

use alloy::primitives::{utils::format_units, U256};
use color::Color;

pub mod color;

/// Pretty-prints a wei amount in gwei.
pub fn format_gwei(wei: U256) -> String {
    match format_units(wei, "gwei") {
        Ok(gwei) => format!("{} gwei", gwei.trim_end_matches('0').trim_end_matches('.')),
        Err(_) => "???".red(),
    }
}

/// Pretty-prints a fee paid for a deployment.
pub fn format_fee(fee: U256) -> String {
    let Ok(eth) = format_units(fee, "ether") else {
        return "???".red();
    };
    let text = format!("{eth} ETH");
    if fee <= U256::from(500_000_000_000_000u64) {
        text.mint()
    } else if fee <= U256::from(5_000_000_000_000_000u64) {
        text.yellow()
    } else {
        text.red()
    }
}

/// Opens a file for writing, or stdout.
pub fn file_or_stdout(path: Option<impl AsRef<Path>>) -> io::Result<Box<dyn io::Write>> {
    Ok(match path {
        Some(file) => Box::new(fs::File::create(file)?),
        None => Box::new(io::stdout().lock()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_formatting() {
        assert_eq!(format_gwei(U256::from(1_000_000_000u64)), "1 gwei");
        assert_eq!(format_gwei(U256::from(1_500_000_000u64)), "1.5 gwei");
        assert_eq!(format_gwei(U256::ZERO), "0 gwei");
    }
}
