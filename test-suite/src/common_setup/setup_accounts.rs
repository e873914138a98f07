use std::collections::BTreeMap;

use scripts::{
    account::{Account, AccountSource, CredentialStore},
    error::AccountError,
};

pub const LOCAL_MNEMONICS: [&str; 3] = ["local zero", "local one", "local two"];
pub const ALICE_MNEMONIC: &str = "alice stored mnemonic";
pub const DEPLOYER_KEY: &str = "deployer configured key";

/// Credentials held in memory: the local node accounts and a few stored ones
#[derive(Debug, Clone)]
pub struct MemoryCredentials {
    pub local: Vec<String>,
    pub stored: BTreeMap<String, String>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self {
            local: LOCAL_MNEMONICS.iter().map(|m| m.to_string()).collect(),
            stored: BTreeMap::from([("alice".to_string(), ALICE_MNEMONIC.to_string())]),
        }
    }
}

impl Default for MemoryCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for MemoryCredentials {
    fn local_account(&self, index: u32) -> Result<Account, AccountError> {
        self.local
            .get(index as usize)
            .map(|m| Account::new(format!("local-{index}"), AccountSource::LocalIndex(index), m))
            .ok_or(AccountError::NoLocalAccount(index))
    }

    fn load(&self, id: &str) -> Result<Account, AccountError> {
        self.stored
            .get(id)
            .map(|m| Account::new(id, AccountSource::Stored(id.to_string()), m))
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    fn from_key(&self, key: &str) -> Result<Account, AccountError> {
        Ok(Account::new("from-key", AccountSource::ConfiguredKey, key))
    }
}
