use std::{collections::BTreeMap, fs, path::Path};

use cosmwasm_std::Addr;
use serde::{Deserialize, Serialize};

use crate::{contracts::ContractKind, error::ConfigError};

/// Deployment history, per contract kind, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRegistry {
    deployments: BTreeMap<ContractKind, Vec<Addr>>,
}

impl DeploymentRegistry {
    pub fn record(&mut self, kind: ContractKind, address: Addr) {
        self.deployments.entry(kind).or_default().push(address);
    }

    pub fn latest(&self, kind: ContractKind) -> Option<Addr> {
        self.deployments
            .get(&kind)
            .and_then(|addresses| addresses.last())
            .cloned()
    }

    pub fn count(&self, kind: ContractKind) -> usize {
        self.deployments.get(&kind).map_or(0, Vec::len)
    }

    /// Reads a registry saved by [`DeploymentRegistry::save`], empty if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |reason: String| ConfigError::Io {
            path: path.to_path_buf(),
            reason,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| write_err(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content).map_err(|e| write_err(e.to_string()))
    }
}
