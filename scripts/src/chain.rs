use std::time::{Duration, Instant};

use cw_orch::prelude::*;

use crate::{account::Account, error::ChainError};

/// Interval between two block height polls while waiting for confirmations
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A submitted transaction, included at `height`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    pub tx_hash: String,
    pub height: u64,
}

/// What the scripts need from a cw-orch environment on top of [`CwEnv`].
pub trait ScriptEnv: CwEnv {
    /// Sender signing as `account`
    fn sender_for(&self, account: &Account) -> Result<Self::Sender, ChainError>;

    /// Hash and inclusion height of an executed transaction
    fn pending_tx(&self, response: &TxResponse<Self>) -> Result<PendingTx, ChainError>;

    /// Lets the chain make progress for at most `duration`
    fn pause(&self, duration: Duration) -> Result<(), ChainError>;
}

/// Height at which a transaction included at `included_at` has `confirmations` confirmations,
/// its own block being the first one.
pub fn confirmation_height(included_at: u64, confirmations: u64) -> u64 {
    included_at.saturating_add(confirmations.saturating_sub(1))
}

/// Time left before `deadline`, `None` once it is reached
pub fn remaining_wait(deadline: Duration, waited: Duration) -> Option<Duration> {
    deadline
        .checked_sub(waited)
        .filter(|left| !left.is_zero())
}

/// Blocks until `tx` has `confirmations` confirmations, or fails with
/// [`ChainError::ConfirmationTimeout`] once `deadline` elapsed.
pub fn wait_for_confirmations<Chain: ScriptEnv>(
    chain: &Chain,
    tx: &PendingTx,
    confirmations: u64,
    deadline: Duration,
) -> Result<(), ChainError> {
    let target = confirmation_height(tx.height, confirmations);
    let start = Instant::now();
    loop {
        let height = chain.block_info().map_err(ChainError::backend)?.height;
        if height >= target {
            return Ok(());
        }
        let waited = start.elapsed();
        let Some(left) = remaining_wait(deadline, waited) else {
            return Err(ChainError::ConfirmationTimeout {
                tx_hash: tx.tx_hash.clone(),
                confirmations,
                waited,
            });
        };
        chain.pause(POLL_INTERVAL.min(left))?;
    }
}

/// In-memory chain. Every account signs as the address named after its label and a pause is
/// one block.
impl ScriptEnv for Mock {
    fn sender_for(&self, account: &Account) -> Result<Addr, ChainError> {
        Ok(Addr::unchecked(account.label()))
    }

    fn pending_tx(&self, _response: &TxResponse<Self>) -> Result<PendingTx, ChainError> {
        let height = self.block_info().map_err(ChainError::backend)?.height;
        Ok(PendingTx {
            tx_hash: format!("mock-{height}"),
            height,
        })
    }

    fn pause(&self, _duration: Duration) -> Result<(), ChainError> {
        self.next_block().map_err(ChainError::backend)
    }
}
