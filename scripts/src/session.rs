use std::collections::HashMap;

use cw_orch::prelude::*;

use crate::{
    account::{resolve_account, Account, AccountRequest, CredentialStore},
    chain::{wait_for_confirmations, PendingTx, ScriptEnv},
    config::{NetworkConfig, ScriptsConfig},
    contracts::ContractInterface,
    error::{ChainError, ScriptError},
    network::{NetworkClass, NetworkEnvs},
    registry::DeploymentRegistry,
};

/// One orchestration run against one network.
///
/// Every deployment goes through [`Session::deploy`], so the registry sees exactly the contracts
/// that were successfully instantiated during (or, outside development networks, before) the run.
pub struct Session<Chain: TxHandler, S> {
    network: String,
    pub config: ScriptsConfig,
    pub chain: Chain,
    pub credentials: S,
    pub registry: DeploymentRegistry,
    persist: bool,
    senders: HashMap<String, Chain::Sender>,
}

impl<Chain, S> Session<Chain, S>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    /// Session with an empty, in-memory deployment history
    pub fn new(
        network: impl Into<String>,
        config: ScriptsConfig,
        chain: Chain,
        credentials: S,
    ) -> Self {
        Self {
            network: network.into(),
            config,
            chain,
            credentials,
            registry: DeploymentRegistry::default(),
            persist: false,
            senders: HashMap::new(),
        }
    }

    /// Session whose deployment history is read from and saved to the deployments directory,
    /// except on development networks where it lives only as long as the process.
    pub fn open(
        network: impl Into<String>,
        config: ScriptsConfig,
        chain: Chain,
        credentials: S,
    ) -> Result<Self, ScriptError> {
        let mut session = Self::new(network, config, chain, credentials);
        if session.class() != NetworkClass::Development {
            session.registry =
                DeploymentRegistry::load(&session.config.registry_path(&session.network))?;
            session.persist = true;
        }
        Ok(session)
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn envs(&self) -> &NetworkEnvs {
        &self.config.envs
    }

    pub fn class(&self) -> NetworkClass {
        self.envs().classify(&self.network)
    }

    pub fn network_config(&self) -> NetworkConfig {
        self.config.network_or_default(&self.network)
    }

    pub fn account(&self, request: &AccountRequest) -> Result<Account, ScriptError> {
        resolve_account(
            &self.credentials,
            &self.network,
            &self.config.envs,
            &self.config.wallets,
            request,
        )
    }

    pub fn default_account(&self) -> Result<Account, ScriptError> {
        self.account(&AccountRequest::default())
    }

    /// The session's chain, signing as `account`
    pub fn signing_chain(&mut self, account: &Account) -> Result<Chain, ChainError> {
        let sender = match self.senders.get(account.label()) {
            Some(sender) => sender.clone(),
            None => {
                let sender = self.chain.sender_for(account)?;
                self.senders
                    .insert(account.label().to_string(), sender.clone());
                sender
            }
        };
        Ok(TxHandler::call_as(&self.chain, &sender))
    }

    /// Instantiates a new `C` signed by `signer` and records it.
    ///
    /// Failing to persist the registry does not undo a deployment that is already on chain, so
    /// it is only reported.
    pub fn deploy<C: ContractInterface<Chain>>(
        &mut self,
        init_msg: &C::InstantiateMsg,
        signer: &Account,
        publish_source: bool,
    ) -> Result<C, ScriptError> {
        let kind = C::KIND;
        if publish_source {
            log::warn!(
                "Source publication is not available on {}, deploying {} without it",
                self.network,
                kind.contract_name()
            );
        }

        let chain = self.signing_chain(signer)?;
        let response = C::load(chain.clone())
            .instantiate(init_msg, None, None)
            .map_err(ChainError::rejected)?;
        let address = response
            .instantiated_contract_address()
            .map_err(ChainError::backend)?;

        self.registry.record(kind, address.clone());
        if self.persist {
            let path = self.config.registry_path(&self.network);
            if let Err(err) = self.registry.save(&path) {
                log::warn!("Could not save deployments to {path:?}: {err}");
            }
        }
        log::info!("Deployed {} at {address}", kind.contract_name());
        Ok(C::at(chain, &address))
    }

    /// Most recent deployment of `C`, signing as `signer`
    pub fn latest<C: ContractInterface<Chain>>(&mut self, signer: &Account) -> Result<C, ScriptError> {
        let address = self
            .registry
            .latest(C::KIND)
            .ok_or(ChainError::NoDeployment(C::KIND))?;
        Ok(C::at(self.signing_chain(signer)?, &address))
    }

    pub fn pending_tx(&self, response: &TxResponse<Chain>) -> Result<PendingTx, ScriptError> {
        Ok(self.chain.pending_tx(response)?)
    }

    /// Waits for the confirmations configured for the network, within its configured deadline
    pub fn wait(&self, tx: &PendingTx) -> Result<(), ScriptError> {
        let network = self.network_config();
        wait_for_confirmations(
            &self.chain,
            tx,
            network.confirmations,
            network.confirmation_timeout(),
        )?;
        Ok(())
    }

    /// Waits for the confirmations of an executed transaction
    pub fn confirm(&self, response: &TxResponse<Chain>) -> Result<PendingTx, ScriptError> {
        let tx = self.pending_tx(response)?;
        self.wait(&tx)?;
        Ok(tx)
    }
}
