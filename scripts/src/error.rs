use std::{path::PathBuf, time::Duration};

use cosmwasm_std::OverflowError;
use thiserror::Error;

use crate::contracts::ContractKind;

#[derive(Error, Debug, PartialEq)]
pub enum ScriptError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown contract name: {0}")]
    UnknownContract(String),

    #[error("No address configured for {contract} on network {network}")]
    MissingAddress { network: String, contract: String },

    #[error("No private key configured (wallets.from_key) for network {network}")]
    MissingPrivateKey { network: String },

    #[error("Network {0} is not configured")]
    UnknownNetwork(String),

    #[error("No chain parameters known for chain id {0}")]
    UnknownChain(String),

    #[error("No code id configured for {kind:?} on network {network}")]
    MissingCodeId { network: String, kind: ContractKind },

    #[error("I/O error on {path:?}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Could not parse configuration: {0}")]
    Parse(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("No stored credential with id {0}")]
    NotFound(String),

    #[error("No local account at index {0}")]
    NoLocalAccount(u32),

    #[error("Keystore entry {id} is invalid: {reason}")]
    Keystore { id: String, reason: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum ChainError {
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Transaction {tx_hash} did not reach {confirmations} confirmation(s) within {waited:?}")]
    ConfirmationTimeout {
        tx_hash: String,
        confirmations: u64,
        waited: Duration,
    },

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error("No {0:?} has been deployed yet")]
    NoDeployment(ContractKind),

    #[error("{0}")]
    Backend(String),
}

impl ChainError {
    pub fn rejected(err: impl ToString) -> Self {
        ChainError::Rejected(err.to_string())
    }

    pub fn backend(err: impl ToString) -> Self {
        ChainError::Backend(err.to_string())
    }
}
