// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use alloy::primitives::{utils::parse_units, U256};
use eyre::{bail, eyre, Context};

use style::{BOLD, ERROR};

mod style;

/// Parses a decimal gwei amount into wei.
pub fn parse_gwei(amount: &str) -> eyre::Result<U256> {
    let amount = amount.trim();
    if amount.starts_with('-') {
        bail!("gwei amount must be non-negative: {amount}");
    }
    let wei = parse_units(amount, "gwei")
        .wrap_err_with(|| format!("invalid gwei amount: {amount}"))?;
    Ok(wei.into())
}

pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let wei = parse_gwei(fee_str)?;
    u128::try_from(wei).map_err(|_| eyre!("Result outside valid range for wei"))
}

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_to_wei() {
        assert_eq!(parse_gwei("1").unwrap(), U256::from(1_000_000_000u64));
        assert_eq!(parse_gwei("0.5").unwrap(), U256::from(500_000_000u64));
        assert_eq!(parse_gwei(" 30 ").unwrap(), U256::from(30_000_000_000u64));
        assert_eq!(convert_gwei_to_wei("0.1").unwrap(), 100_000_000);
    }

    #[test]
    fn rejects_bad_gwei() {
        for bad in ["-1", "inf", "NaN", "one gwei"] {
            assert!(parse_gwei(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn decodes_hex_with_or_without_prefix() {
        assert_eq!(decode0x("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode0x(" 0a0b\n").unwrap(), vec![0x0a, 0x0b]);
        assert!(decode0x("0xzz").is_err());
    }
}
