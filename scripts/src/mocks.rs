use cosmwasm_std::Uint128;
use lottery_interface::mocks::{
    PriceFeedInstantiateMsg, VrfCoordinatorExecuteMsgFns, VrfCoordinatorInstantiateMsg,
    VrfCoordinatorQueryMsgFns, BASE_FEE, DECIMALS, GAS_PRICE_LINK, INITIAL_VALUE,
};

use crate::{
    account::CredentialStore,
    chain::{PendingTx, ScriptEnv},
    error::{ChainError, ScriptError},
    interfaces::{PriceFeed, VrfCoordinator},
    session::Session,
};

pub const DEFAULT_FUNDING_AMOUNT: u128 = 100_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockParams {
    pub decimals: u8,
    pub initial_value: u128,
}

impl Default for MockParams {
    fn default() -> Self {
        Self {
            decimals: DECIMALS,
            initial_value: INITIAL_VALUE,
        }
    }
}

/// Deploys a fresh price feed mock and a fresh randomness coordinator mock.
///
/// Each call deploys new instances. Callers check the registry first when they only need one.
pub fn deploy_mocks<Chain, S>(
    session: &mut Session<Chain, S>,
    params: MockParams,
) -> Result<(PriceFeed<Chain>, VrfCoordinator<Chain>), ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;

    let price_feed = session.deploy::<PriceFeed<Chain>>(
        &PriceFeedInstantiateMsg {
            decimals: params.decimals,
            initial_answer: Uint128::new(params.initial_value),
        },
        &account,
        false,
    )?;
    let coordinator = session.deploy::<VrfCoordinator<Chain>>(
        &VrfCoordinatorInstantiateMsg {
            base_fee: Uint128::new(BASE_FEE),
            gas_price_link: Uint128::new(GAS_PRICE_LINK),
        },
        &account,
        false,
    )?;

    log::info!("Mocks deployed!");
    Ok((price_feed, coordinator))
}

/// Funds `subscription_id` on the latest randomness coordinator mock. Never deploys one.
pub fn fund_subscription<Chain, S>(
    session: &mut Session<Chain, S>,
    subscription_id: u64,
    amount: u128,
) -> Result<PendingTx, ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;
    let coordinator = session.latest::<VrfCoordinator<Chain>>(&account)?;

    let response = coordinator
        .fund_subscription(Uint128::new(amount), subscription_id)
        .map_err(ChainError::rejected)?;
    let tx = session.pending_tx(&response)?;

    let balance = coordinator
        .get_subscription(subscription_id)
        .map_err(ChainError::backend)?
        .balance;
    log::info!("Subscription {subscription_id} funded with {amount}, balance is now {balance}");
    Ok(tx)
}
