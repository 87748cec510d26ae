use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DEFAULT_NOTES_FILE;
use crate::load_from_file;

/// Empty url, the client falls back to its default public testnet endpoint.
pub const PUBLIC_NODE: &str = "";
pub const LOCAL_NODE: &str = "http://localhost:57291";

pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeEndpoint {
    #[default]
    PublicTestnet,
    Local,
}

impl NodeEndpoint {
    pub fn url(&self) -> &'static str {
        match self {
            NodeEndpoint::PublicTestnet => PUBLIC_NODE,
            NodeEndpoint::Local => LOCAL_NODE,
        }
    }

    pub fn toggle(&self) -> NodeEndpoint {
        match self {
            NodeEndpoint::PublicTestnet => NodeEndpoint::Local,
            NodeEndpoint::Local => NodeEndpoint::PublicTestnet,
        }
    }
}

impl fmt::Display for NodeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeEndpoint::PublicTestnet => write!(f, "Public Testnet"),
            NodeEndpoint::Local => write!(f, "Local Node ({})", LOCAL_NODE),
        }
    }
}

/// Session settings, handed explicitly to whatever needs them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallotConfig {
    pub node: NodeEndpoint,
    pub batch_size: usize,
    pub notes_file: PathBuf,
}

impl Default for BallotConfig {
    fn default() -> Self {
        BallotConfig {
            node: NodeEndpoint::default(),
            batch_size: 5,
            notes_file: PathBuf::from(DEFAULT_NOTES_FILE),
        }
    }
}

impl BallotConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let config: BallotConfig = load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(format!("The batch size must be between 1 and {}", MAX_BATCH_SIZE).into());
        }
        Ok(())
    }
}
