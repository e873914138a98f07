use std::{collections::BTreeMap, thread, time::Duration};

use cw_orch::{
    daemon::{CosmTxResponse, Daemon, Wallet},
    prelude::*,
};

use crate::{
    account::{resolve_account, Account, AccountRequest, Keystore},
    chain::{PendingTx, ScriptEnv},
    chain_info,
    config::{self, ScriptsConfig},
    contracts::{register_code_ids, ContractKind},
    error::{ChainError, ConfigError, ScriptError},
    session::Session,
};

/// A node reached over grpc. Each account gets its own wallet, derived from its mnemonic.
impl ScriptEnv for Daemon {
    fn sender_for(&self, account: &Account) -> Result<Wallet, ChainError> {
        let daemon = self
            .rebuild()
            .mnemonic(account.mnemonic())
            .build()
            .map_err(ChainError::backend)?;
        Ok(daemon.wallet())
    }

    fn pending_tx(&self, response: &CosmTxResponse) -> Result<PendingTx, ChainError> {
        Ok(PendingTx {
            tx_hash: response.txhash.clone(),
            height: response.height,
        })
    }

    fn pause(&self, duration: Duration) -> Result<(), ChainError> {
        thread::sleep(duration);
        Ok(())
    }
}

/// Chain parameters and code ids of `network`.
///
/// The lottery code is always required, mock code only on development networks.
pub fn chain_settings(
    config: &ScriptsConfig,
    network: &str,
) -> Result<(ChainInfo, BTreeMap<ContractKind, u64>), ConfigError> {
    let network_config = config
        .network(network)
        .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))?;
    let chain_id = network_config.chain_id.as_deref().unwrap_or(network);
    let chain =
        chain_info(chain_id).ok_or_else(|| ConfigError::UnknownChain(chain_id.to_string()))?;

    let required: &[ContractKind] = if config.envs.is_development(network) {
        &ContractKind::ALL
    } else {
        &[ContractKind::Lottery]
    };
    let mut code_ids = BTreeMap::new();
    for kind in required {
        code_ids.insert(*kind, config.code_id(network, *kind)?);
    }
    Ok((chain, code_ids))
}

/// Session on the network named by `LOTTERY_NETWORK`, configured from `LOTTERY_CONFIG` and
/// signing with credentials from `LOTTERY_KEYSTORE`.
pub fn open_session() -> Result<Session<Daemon, Keystore>, ScriptError> {
    let network = config::active_network();
    let config = ScriptsConfig::load_or_default(&config::config_path())?;
    let keystore = Keystore::new(config.local.accounts.clone(), config::keystore_dir());

    let account = resolve_account(
        &keystore,
        &network,
        &config.envs,
        &config.wallets,
        &AccountRequest::default(),
    )?;
    let (chain, code_ids) = chain_settings(&config, &network)?;
    log::info!("Running on {network} ({})", chain.chain_id);

    let daemon = Daemon::builder()
        .chain(chain)
        .mnemonic(account.mnemonic())
        .build()
        .map_err(ChainError::backend)?;
    register_code_ids(&daemon, &code_ids);

    Session::open(network, config, daemon, keystore)
}
