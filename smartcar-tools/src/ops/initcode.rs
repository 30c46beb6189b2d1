// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use crate::core::{
    artifact::ArtifactResolver,
    deployment::encode_constructor,
    migration::{SmartCarMigration, CONTRACT_NAME},
};

/// Writes the hex-encoded creation code of `SmartCar`, constructor arguments included.
pub fn write_initcode(
    migration: &SmartCarMigration,
    artifacts: &impl ArtifactResolver,
    mut output: impl io::Write,
) -> eyre::Result<()> {
    let artifact = artifacts.resolve(CONTRACT_NAME)?;
    let initcode = encode_constructor(&artifact, &migration.constructor_args())?;
    output.write_all(hex::encode(initcode).as_bytes())?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::artifact::ArtifactDir;

    #[test]
    fn initcode_ends_with_encoded_args() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("SmartCar.json"),
            r#"{
                "abi": [{"type": "constructor", "stateMutability": "nonpayable", "inputs": [
                    {"name": "_pricePerSecond", "type": "uint256"},
                    {"name": "_warningPeriod", "type": "uint256"}
                ]}],
                "bytecode": "0x6080604052"
            }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        write_initcode(
            &SmartCarMigration::default(),
            &ArtifactDir::new(dir.path()),
            &mut out,
        )
        .unwrap();

        let hex = String::from_utf8(out).unwrap();
        assert_eq!(
            hex,
            format!("6080604052{:0>64}{:0>64}", "3b9aca00", "1e"),
        );
    }
}
