use cosmwasm_std::{coin, Addr, Uint128};
use cw_orch::prelude::QueryHandler;
use lottery_interface::lottery::{
    ExecuteMsgFns, InstantiateMsg, QueryMsgFns, DEFAULT_SUBSCRIPTION_ID,
};

use crate::{
    account::CredentialStore,
    chain::ScriptEnv,
    contracts::{resolve_contract, ContractName},
    error::{ChainError, ScriptError},
    interfaces::Lottery,
    mocks::{fund_subscription, DEFAULT_FUNDING_AMOUNT},
    network::NetworkClass,
    session::Session,
};

/// Sent on top of the entrance fee so that a price move between query and entry does not fail it
pub const ENTRY_FEE_BUFFER: u128 = 10_000_000;

/// Subscription funded before a round is ended on development networks
pub const DEV_SUBSCRIPTION_ID: u64 = 150;

pub fn deploy_lottery<Chain, S>(session: &mut Session<Chain, S>) -> Result<Lottery<Chain>, ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;
    let price_feed = resolve_contract(session, ContractName::EthUsdPriceFeed)?;
    let publish_source = session.network_config().verify;

    let lottery = session.deploy::<Lottery<Chain>>(
        &InstantiateMsg {
            price_feed: price_feed.address()?.to_string(),
            subscription_id: DEFAULT_SUBSCRIPTION_ID,
        },
        &account,
        publish_source,
    )?;

    log::info!("Lottery deployed!");
    Ok(lottery)
}

pub fn start_lottery<Chain, S>(session: &mut Session<Chain, S>) -> Result<(), ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;
    let lottery = session.latest::<Lottery<Chain>>(&account)?;

    let response = lottery.start_lottery().map_err(ChainError::rejected)?;
    session.confirm(&response)?;

    log::info!("The lottery has started!");
    Ok(())
}

pub fn enter_lottery<Chain, S>(session: &mut Session<Chain, S>) -> Result<(), ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;
    let lottery = session.latest::<Lottery<Chain>>(&account)?;

    let fee = lottery.entrance_fee().map_err(ChainError::backend)?;
    let value = fee
        .checked_add(Uint128::new(ENTRY_FEE_BUFFER))
        .map_err(ChainError::from)?;
    let funds = [coin(value.u128(), session.network_config().denom)];

    let response = lottery.enter(&funds).map_err(ChainError::rejected)?;
    session.confirm(&response)?;

    log::info!("You entered the lottery!");
    Ok(())
}

/// Ends the round and returns the winner once the settle time has passed, `None` when the
/// randomness has not been delivered yet.
pub fn end_lottery<Chain, S>(session: &mut Session<Chain, S>) -> Result<Option<Addr>, ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    let account = session.default_account()?;
    let lottery = session.latest::<Lottery<Chain>>(&account)?;

    // Only the mock coordinator can be funded from here
    if session.class() == NetworkClass::Development {
        let tx = fund_subscription(session, DEV_SUBSCRIPTION_ID, DEFAULT_FUNDING_AMOUNT)?;
        session.wait(&tx)?;
    }

    let response = lottery.end_lottery().map_err(ChainError::rejected)?;
    session.confirm(&response)?;
    log::info!("You ended the lottery! Calculating winner...");

    session
        .chain
        .wait_seconds(session.network_config().winner_settle().as_secs())
        .map_err(ChainError::backend)?;

    let winner = lottery.recent_winner().map_err(ChainError::backend)?;
    match &winner {
        Some(winner) => log::info!("{winner} is the winner!"),
        None => log::warn!("No winner picked yet"),
    }
    Ok(winner)
}

/// Deploys a lottery and plays one full round with the default account
pub fn run<Chain, S>(session: &mut Session<Chain, S>) -> Result<Option<Addr>, ScriptError>
where
    Chain: ScriptEnv,
    S: CredentialStore,
{
    deploy_lottery(session)?;
    start_lottery(session)?;
    enter_lottery(session)?;
    end_lottery(session)
}
