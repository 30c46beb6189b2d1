// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts, resolvable by contract name.
//!
//! Both the Truffle layout (`"bytecode": "0x..."`) and the Foundry layout
//! (`"bytecode": { "object": "0x..." }`) are accepted.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

/// A compiled contract: its ABI and creation bytecode.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Parses an artifact from its JSON representation.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
        let file: ArtifactFile = serde_json::from_str(json)?;
        Ok(Self {
            name: name.into(),
            abi: file.abi,
            bytecode: file.bytecode.into_bytes(),
        })
    }

    /// The ABI constructor, if the contract declares one.
    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }
}

#[derive(Deserialize)]
struct ArtifactFile {
    abi: JsonAbi,
    bytecode: Bytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Bytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl Bytecode {
    fn into_bytes(self) -> Bytes {
        match self {
            Self::Hex(bytes) | Self::Object { object: bytes } => bytes,
        }
    }
}

/// Maps a contract name to a deployable artifact.
pub trait ArtifactResolver {
    fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError>;
}

/// Resolves `<root>/<Name>.json`.
#[derive(Debug, Clone)]
pub struct ArtifactDir {
    root: PathBuf,
}

impl ArtifactDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl ArtifactResolver for ArtifactDir {
    fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.path_of(name);
        debug!(@grey, "reading artifact {name} from {}", path.display());
        let json = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ArtifactError::NotFound {
                name: name.to_owned(),
                path: path.clone(),
            },
            _ => ArtifactError::Io {
                path: path.clone(),
                source,
            },
        })?;
        let artifact = Artifact::from_json(name, &json).map_err(|source| ArtifactError::Json {
            path: path.clone(),
            source,
        })?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(name.to_owned()));
        }
        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {name} not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
}
