//! Script configuration.
//!
//! Everything network specific lives in a toml file (`lottery.toml` unless `LOTTERY_CONFIG`
//! says otherwise):
//!
//! ```toml
//! [wallets]
//! from_key = "${PRIVATE_KEY}"
//!
//! [local]
//! accounts = ["${LOCAL_MNEMONIC}"]
//!
//! [networks.elgafar-1]
//! chain_id = "elgafar-1"
//! verify = false
//! contracts = { eth_usd_price_feed = "stars1..." }
//! code_ids = { lottery = 4012 }
//! ```
//!
//! Values written as `${VAR}` in `[wallets]` and `[local]` are read from the environment (and so
//! from `.env` once `dotenv` ran). An unset variable leaves the entry empty.

use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use cosmwasm_std::Addr;
use serde::Deserialize;

use crate::{
    contracts::{ContractKind, ContractName},
    error::ConfigError,
    network::{NetworkEnvs, DEFAULT_NETWORK},
};

pub const CONFIG_ENV: &str = "LOTTERY_CONFIG";
pub const NETWORK_ENV: &str = "LOTTERY_NETWORK";
pub const KEYSTORE_ENV: &str = "LOTTERY_KEYSTORE";

pub const DEFAULT_CONFIG_PATH: &str = "lottery.toml";
pub const DEFAULT_KEYSTORE_DIR: &str = ".keystore";
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";
pub const DEFAULT_DENOM: &str = "ustars";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptsConfig {
    #[serde(default)]
    pub envs: NetworkEnvs,
    #[serde(default)]
    pub wallets: WalletsConfig,
    #[serde(default)]
    pub local: LocalAccountsConfig,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
    #[serde(default = "default_deployments_dir")]
    pub deployments_dir: PathBuf,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            envs: NetworkEnvs::default(),
            wallets: WalletsConfig::default(),
            local: LocalAccountsConfig::default(),
            networks: BTreeMap::new(),
            deployments_dir: default_deployments_dir(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WalletsConfig {
    pub from_key: Option<String>,
}

/// Accounts of the local node, addressed by index.
///
/// An entry whose variable is unset stays in place as `None` so later indices keep their meaning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocalAccountsConfig {
    #[serde(default)]
    pub accounts: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: Option<String>,
    #[serde(default = "default_denom")]
    pub denom: String,
    /// Addresses of already deployed dependencies, keyed by logical contract name
    #[serde(default)]
    pub contracts: BTreeMap<String, String>,
    /// Uploaded code to instantiate, keyed by contract kind
    #[serde(default)]
    pub code_ids: BTreeMap<String, u64>,
    #[serde(default)]
    pub verify: bool,
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,
    #[serde(default = "default_winner_settle_secs")]
    pub winner_settle_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: None,
            denom: default_denom(),
            contracts: BTreeMap::new(),
            code_ids: BTreeMap::new(),
            verify: false,
            confirmations: default_confirmations(),
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
            winner_settle_secs: default_winner_settle_secs(),
        }
    }
}

impl NetworkConfig {
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    pub fn winner_settle(&self) -> Duration {
        Duration::from_secs(self.winner_settle_secs)
    }
}

fn default_deployments_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DEPLOYMENTS_DIR)
}

fn default_denom() -> String {
    DEFAULT_DENOM.to_string()
}

fn default_confirmations() -> u64 {
    1
}

fn default_confirmation_timeout_secs() -> u64 {
    120
}

fn default_winner_settle_secs() -> u64 {
    5
}

impl ScriptsConfig {
    /// Parses and validates a configuration, expanding `${VAR}` entries from the process environment
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, |var| env::var(var).ok())
    }

    /// Same as [`ScriptsConfig::from_toml_str`] with an explicit environment lookup
    pub fn parse(
        content: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: ScriptsConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.expand_env(lookup);
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the file at `path`, or falls back to the defaults when there is none
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No configuration at {path:?}, using defaults");
            Ok(Self::default())
        }
    }

    fn expand_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.wallets.from_key = self
            .wallets
            .from_key
            .take()
            .and_then(|key| expand_value(&key, &lookup));
        for account in self.local.accounts.iter_mut() {
            *account = account
                .take()
                .and_then(|value| expand_value(&value, &lookup));
        }
    }

    /// Rejects contract names and kinds nothing knows how to resolve, before any transaction is sent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for network in self.networks.values() {
            for name in network.contracts.keys() {
                ContractName::from_str(name)?;
            }
            for kind in network.code_ids.keys() {
                ContractKind::from_str(kind)?;
            }
        }
        Ok(())
    }

    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    /// Settings of `name`, defaults for networks the file does not mention
    pub fn network_or_default(&self, name: &str) -> NetworkConfig {
        self.network(name).cloned().unwrap_or_default()
    }

    pub fn address(&self, network: &str, contract: ContractName) -> Result<Addr, ConfigError> {
        self.network(network)
            .and_then(|n| n.contracts.get(contract.as_str()))
            .map(Addr::unchecked)
            .ok_or_else(|| ConfigError::MissingAddress {
                network: network.to_string(),
                contract: contract.to_string(),
            })
    }

    pub fn code_id(&self, network: &str, kind: ContractKind) -> Result<u64, ConfigError> {
        self.network(network)
            .and_then(|n| n.code_ids.get(kind.config_key()))
            .copied()
            .ok_or_else(|| ConfigError::MissingCodeId {
                network: network.to_string(),
                kind,
            })
    }

    pub fn registry_path(&self, network: &str) -> PathBuf {
        self.deployments_dir.join(format!("{network}.json"))
    }
}

fn expand_value(value: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    match value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        Some(var) => lookup(var).filter(|v| !v.is_empty()),
        None if value.is_empty() => None,
        None => Some(value.to_string()),
    }
}

pub fn active_network() -> String {
    env::var(NETWORK_ENV).unwrap_or_else(|_| DEFAULT_NETWORK.to_string())
}

pub fn config_path() -> PathBuf {
    env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn keystore_dir() -> PathBuf {
    env::var(KEYSTORE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_KEYSTORE_DIR))
}
