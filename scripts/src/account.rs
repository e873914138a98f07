use std::{fmt, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;

use crate::{
    config::WalletsConfig,
    error::{AccountError, ConfigError, ScriptError},
    network::NetworkEnvs,
};

/// Where an account's credential came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSource {
    LocalIndex(u32),
    Stored(String),
    LocalDefault,
    ConfiguredKey,
}

/// A credential able to sign transactions
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    label: String,
    source: AccountSource,
    mnemonic: String,
}

impl Account {
    pub fn new(label: impl Into<String>, source: AccountSource, mnemonic: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source,
            mnemonic: mnemonic.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &AccountSource {
        &self.source
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    fn with_source(mut self, source: AccountSource) -> Self {
        self.source = source;
        self
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("label", &self.label)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Explicit selection of an account. Both fields are optional, the index takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRequest {
    pub index: Option<u32>,
    pub id: Option<String>,
}

impl AccountRequest {
    pub fn index(index: u32) -> Self {
        Self {
            index: Some(index),
            id: None,
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            index: None,
            id: Some(id.into()),
        }
    }
}

pub trait CredentialStore {
    /// Account of the local node at `index`
    fn local_account(&self, index: u32) -> Result<Account, AccountError>;
    /// Credential saved under `id`
    fn load(&self, id: &str) -> Result<Account, AccountError>;
    /// Credential built from raw key material
    fn from_key(&self, key: &str) -> Result<Account, AccountError>;
}

/// Resolves the account transactions are signed with.
///
/// First match wins: explicit index, explicit id, the first local account on development and
/// forked-local networks, and finally the key configured under `wallets.from_key`. A blank key
/// counts as no key at all.
pub fn resolve_account(
    store: &impl CredentialStore,
    network: &str,
    envs: &NetworkEnvs,
    wallets: &WalletsConfig,
    request: &AccountRequest,
) -> Result<Account, ScriptError> {
    if let Some(index) = request.index {
        return Ok(store.local_account(index)?);
    }

    if let Some(id) = &request.id {
        return Ok(store.load(id)?);
    }

    if envs.classify(network).has_local_accounts() {
        return Ok(store.local_account(0)?.with_source(AccountSource::LocalDefault));
    }

    let key = wallets
        .from_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ConfigError::MissingPrivateKey {
            network: network.to_string(),
        })?;
    Ok(store.from_key(key)?)
}

#[derive(Deserialize)]
struct KeystoreEntry {
    mnemonic: String,
}

/// Credentials of the local node plus the ones saved as `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct Keystore {
    local_accounts: Vec<Option<String>>,
    dir: PathBuf,
}

impl Keystore {
    pub fn new(local_accounts: Vec<Option<String>>, dir: impl Into<PathBuf>) -> Self {
        Self {
            local_accounts,
            dir: dir.into(),
        }
    }

    fn entry_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl CredentialStore for Keystore {
    fn local_account(&self, index: u32) -> Result<Account, AccountError> {
        self.local_accounts
            .get(index as usize)
            .and_then(Option::as_ref)
            .map(|mnemonic| {
                Account::new(
                    format!("local-{index}"),
                    AccountSource::LocalIndex(index),
                    mnemonic,
                )
            })
            .ok_or(AccountError::NoLocalAccount(index))
    }

    fn load(&self, id: &str) -> Result<Account, AccountError> {
        let content = match fs::read_to_string(self.entry_path(id)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AccountError::NotFound(id.to_string()))
            }
            Err(e) => {
                return Err(AccountError::Keystore {
                    id: id.to_string(),
                    reason: e.to_string(),
                })
            }
        };
        let entry: KeystoreEntry =
            serde_json::from_str(&content).map_err(|e| AccountError::Keystore {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Account::new(
            id,
            AccountSource::Stored(id.to_string()),
            entry.mnemonic,
        ))
    }

    fn from_key(&self, key: &str) -> Result<Account, AccountError> {
        Ok(Account::new("from-key", AccountSource::ConfiguredKey, key))
    }
}
