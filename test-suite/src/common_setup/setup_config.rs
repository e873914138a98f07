use std::{collections::HashMap, path::Path};

use cw_orch::prelude::Mock;
use scripts::{config::ScriptsConfig, session::Session};

use super::{
    app::mock_chain,
    setup_accounts::{MemoryCredentials, DEPLOYER_KEY},
};

pub const DEV_NETWORK: &str = "development";
pub const FORK_NETWORK: &str = "stargaze-fork-dev";
pub const TESTNET: &str = "elgafar-1";
pub const MAINNET: &str = "stargaze-1";

pub const TESTNET_PRICE_FEED: &str = "stars1testnetpricefeed";
pub const TESTNET_VRF_COORDINATOR: &str = "stars1testnetvrfcoordinator";
pub const FORK_PRICE_FEED: &str = "stars1forkpricefeed";

pub const TEST_CONFIG: &str = r#"
[wallets]
from_key = "${PRIVATE_KEY}"

[networks.development]
winner_settle_secs = 0

[networks.stargaze-fork-dev]
winner_settle_secs = 0
contracts = { eth_usd_price_feed = "stars1forkpricefeed" }

[networks.elgafar-1]
chain_id = "elgafar-1"
verify = true
winner_settle_secs = 0
contracts = { eth_usd_price_feed = "stars1testnetpricefeed", vrf_coordinator = "stars1testnetvrfcoordinator" }
code_ids = { lottery = 4012 }

[networks.stargaze-1]
chain_id = "stargaze-1"
winner_settle_secs = 0
"#;

/// Test configuration with `PRIVATE_KEY` set
pub fn test_config() -> ScriptsConfig {
    config_with_env(&[("PRIVATE_KEY", DEPLOYER_KEY)])
}

/// Test configuration without any environment variable set
pub fn config_without_key() -> ScriptsConfig {
    config_with_env(&[])
}

pub fn config_with_env(vars: &[(&str, &str)]) -> ScriptsConfig {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ScriptsConfig::parse(TEST_CONFIG, |var| env.get(var).cloned()).unwrap()
}

pub type MockSession = Session<Mock, MemoryCredentials>;

pub fn mock_session(network: &str) -> MockSession {
    Session::new(network, test_config(), mock_chain(), MemoryCredentials::new())
}

pub fn mock_session_with(network: &str, config: ScriptsConfig, chain: Mock) -> MockSession {
    Session::new(network, config, chain, MemoryCredentials::new())
}

/// Session keeping its deployment history under `deployments_dir`, on a fresh chain
pub fn persistent_session(network: &str, deployments_dir: &Path) -> MockSession {
    persistent_session_on(network, deployments_dir, mock_chain())
}

pub fn persistent_session_on(network: &str, deployments_dir: &Path, chain: Mock) -> MockSession {
    let mut config = test_config();
    config.deployments_dir = deployments_dir.to_path_buf();
    Session::open(network, config, chain, MemoryCredentials::new()).unwrap()
}
