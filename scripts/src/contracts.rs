use std::{collections::BTreeMap, fmt, str::FromStr};

use cw_orch::{environment::ChainState, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    account::CredentialStore,
    chain::ScriptEnv,
    error::{ChainError, ConfigError, ScriptError},
    interfaces::{PriceFeed, VrfCoordinator},
    mocks::{deploy_mocks, MockParams},
    session::Session,
};

/// Logical names of the contracts the lottery depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractName {
    EthUsdPriceFeed,
    VrfCoordinator,
}

impl ContractName {
    pub const ALL: [ContractName; 2] = [ContractName::EthUsdPriceFeed, ContractName::VrfCoordinator];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::EthUsdPriceFeed => "eth_usd_price_feed",
            ContractName::VrfCoordinator => "vrf_coordinator",
        }
    }

    /// The contract that stands in for this dependency on development networks
    pub fn mock_kind(&self) -> ContractKind {
        match self {
            ContractName::EthUsdPriceFeed => ContractKind::MockPriceFeed,
            ContractName::VrfCoordinator => ContractKind::MockVrfCoordinator,
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownContract(s.to_string()))
    }
}

/// Contract types this crate deploys or binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    MockPriceFeed,
    MockVrfCoordinator,
    Lottery,
}

impl ContractKind {
    pub const ALL: [ContractKind; 3] = [
        ContractKind::MockPriceFeed,
        ContractKind::MockVrfCoordinator,
        ContractKind::Lottery,
    ];

    /// Name of the contract type, used as the on-chain label
    pub fn contract_name(&self) -> &'static str {
        match self {
            ContractKind::MockPriceFeed => "MockV3Aggregator",
            ContractKind::MockVrfCoordinator => "VRFCoordinatorV2Mock",
            ContractKind::Lottery => "Lottery",
        }
    }

    /// Id of this kind in the cw-orch state, where its code id and latest address live
    pub fn contract_id(&self) -> &'static str {
        match self {
            ContractKind::MockPriceFeed => "price_feed",
            ContractKind::MockVrfCoordinator => "vrf_coordinator",
            ContractKind::Lottery => "lottery",
        }
    }

    /// Key of this kind in the `code_ids` table of a network
    pub fn config_key(&self) -> &'static str {
        match self {
            ContractKind::MockPriceFeed => "mock_price_feed",
            ContractKind::MockVrfCoordinator => "mock_vrf_coordinator",
            ContractKind::Lottery => "lottery",
        }
    }
}

impl FromStr for ContractKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractKind::ALL
            .into_iter()
            .find(|kind| kind.config_key() == s)
            .ok_or_else(|| ConfigError::UnknownContract(s.to_string()))
    }
}

/// A cw-orch interface the scripts deploy and bind to.
pub trait ContractInterface<Chain: CwEnv>:
    ContractInstance<Chain> + InstantiableContract + Sized
{
    const KIND: ContractKind;

    /// Interface on `chain`, bound to whatever address the cw-orch state holds for the kind.
    /// Instantiating it records the new address there.
    fn load(chain: Chain) -> Self;

    /// Interface on `chain` bound to `address` for as long as it lives. Later deployments of the
    /// same kind do not move it.
    fn at(chain: Chain, address: &Addr) -> Self;
}

/// A resolved dependency of the lottery
#[derive(Clone)]
pub enum Dependency<Chain> {
    PriceFeed(PriceFeed<Chain>),
    VrfCoordinator(VrfCoordinator<Chain>),
}

impl<Chain: CwEnv> Dependency<Chain> {
    fn bind(chain: Chain, name: ContractName, address: &Addr) -> Self {
        match name {
            ContractName::EthUsdPriceFeed => Dependency::PriceFeed(PriceFeed::at(chain, address)),
            ContractName::VrfCoordinator => {
                Dependency::VrfCoordinator(VrfCoordinator::at(chain, address))
            }
        }
    }

    pub fn name(&self) -> ContractName {
        match self {
            Dependency::PriceFeed(_) => ContractName::EthUsdPriceFeed,
            Dependency::VrfCoordinator(_) => ContractName::VrfCoordinator,
        }
    }

    pub fn address(&self) -> Result<Addr, ChainError> {
        match self {
            Dependency::PriceFeed(contract) => contract.address(),
            Dependency::VrfCoordinator(contract) => contract.address(),
        }
        .map_err(ChainError::backend)
    }
}

/// Returns a callable handle to the dependency `name`.
///
/// On development networks this is the latest deployed mock, mocks being deployed the first
/// time none exists. Everywhere else the address comes from the network configuration and
/// nothing is deployed.
pub fn resolve_contract<Chain, S>(
    session: &mut Session<Chain, S>,
    name: ContractName,
) -> Result<Dependency<Chain>, ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let kind = name.mock_kind();

    let address = if session.envs().is_development(session.network()) {
        if session.registry.count(kind) == 0 {
            log::debug!("No {} deployed yet, deploying mocks", kind.contract_name());
            deploy_mocks(session, MockParams::default())?;
        }
        session
            .registry
            .latest(kind)
            .ok_or(ChainError::NoDeployment(kind))?
    } else {
        session.config.address(session.network(), name)?
    };

    log::debug!("Binding {name} to {address}");
    Ok(Dependency::bind(session.chain.clone(), name, &address))
}

/// Makes the configured code ids known to the cw-orch state of `chain`
pub fn register_code_ids<Chain: ChainState>(chain: &Chain, code_ids: &BTreeMap<ContractKind, u64>) {
    let mut state = chain.state();
    for (kind, code_id) in code_ids {
        state.set_code_id(kind.contract_id(), *code_id);
    }
}
