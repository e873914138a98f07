use std::collections::BTreeSet;

use serde::Deserialize;

pub const DEFAULT_NETWORK: &str = "development";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkClass {
    /// Throwaway local chain, dependencies are mocked
    Development,
    /// Local chain forked from a live network, dependencies are the real ones
    ForkedLocal,
    Production,
}

impl NetworkClass {
    /// Whether local development accounts are available on this network
    pub fn has_local_accounts(&self) -> bool {
        matches!(self, NetworkClass::Development | NetworkClass::ForkedLocal)
    }
}

/// The two sets of network names that decide how a network is treated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkEnvs {
    #[serde(default)]
    pub development: BTreeSet<String>,
    #[serde(default)]
    pub forked_local: BTreeSet<String>,
}

impl Default for NetworkEnvs {
    fn default() -> Self {
        Self::new(["development", "local-stargaze"], ["stargaze-fork-dev"])
    }
}

impl NetworkEnvs {
    pub fn new<D, F>(development: D, forked_local: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            development: development.into_iter().map(Into::into).collect(),
            forked_local: forked_local.into_iter().map(Into::into).collect(),
        }
    }

    /// Every name maps to exactly one class. The development set wins if a name is in both.
    pub fn classify(&self, network: &str) -> NetworkClass {
        if self.development.contains(network) {
            NetworkClass::Development
        } else if self.forked_local.contains(network) {
            NetworkClass::ForkedLocal
        } else {
            NetworkClass::Production
        }
    }

    pub fn is_development(&self, network: &str) -> bool {
        self.classify(network) == NetworkClass::Development
    }
}
