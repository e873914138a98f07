use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw_storage_plus::Item;
use lottery_interface::{
    lottery::{ExecuteMsg, InstantiateMsg, QueryMsg},
    mocks::{PriceFeedQueryMsg, RoundDataResponse},
};

use super::app::DENOM;

#[cw_serde]
pub struct Config {
    pub price_feed: Addr,
    pub subscription_id: u64,
}

#[cw_serde]
pub enum Phase {
    Open,
    Closed,
}

const CONFIG: Item<Config> = Item::new("config");
const PHASE: Item<Phase> = Item::new("phase");
const PLAYERS: Item<Vec<Addr>> = Item::new("players");
const RECENT_WINNER: Item<Option<Addr>> = Item::new("recent_winner");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    CONFIG.save(
        deps.storage,
        &Config {
            price_feed: Addr::unchecked(msg.price_feed),
            subscription_id: msg.subscription_id,
        },
    )?;
    PHASE.save(deps.storage, &Phase::Closed)?;
    PLAYERS.save(deps.storage, &vec![])?;
    RECENT_WINNER.save(deps.storage, &None)?;
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::StartLottery {} => {
            if PHASE.load(deps.storage)? != Phase::Closed {
                return Err(StdError::generic_err("Can't start a new lottery yet"));
            }
            PHASE.save(deps.storage, &Phase::Open)?;
            PLAYERS.save(deps.storage, &vec![])?;
            Ok(Response::new().add_attribute("action", "start_lottery"))
        }
        ExecuteMsg::Enter {} => {
            if PHASE.load(deps.storage)? != Phase::Open {
                return Err(StdError::generic_err("The lottery is not open"));
            }
            let fee = entrance_fee(deps.as_ref())?;
            let paid = info
                .funds
                .iter()
                .find(|c| c.denom == DENOM)
                .map(|c| c.amount)
                .unwrap_or_default();
            if paid < fee {
                return Err(StdError::generic_err("Not enough funds sent"));
            }
            PLAYERS.update(deps.storage, |mut players| -> StdResult<_> {
                players.push(info.sender.clone());
                Ok(players)
            })?;
            Ok(Response::new().add_attribute("action", "enter"))
        }
        ExecuteMsg::EndLottery {} => {
            if PHASE.load(deps.storage)? != Phase::Open {
                return Err(StdError::generic_err("The lottery is not open"));
            }
            let players = PLAYERS.load(deps.storage)?;
            // Block height stands in for the coordinator's random words
            let winner = (!players.is_empty())
                .then(|| players[env.block.height as usize % players.len()].clone());
            RECENT_WINNER.save(deps.storage, &winner)?;
            PHASE.save(deps.storage, &Phase::Closed)?;
            Ok(Response::new().add_attribute("action", "end_lottery"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::EntranceFee {} => to_json_binary(&entrance_fee(deps)?),
        QueryMsg::RecentWinner {} => to_json_binary(&RECENT_WINNER.load(deps.storage)?),
    }
}

/// One unit of the native denom per unit of the feed's latest answer
fn entrance_fee(deps: Deps) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let round: RoundDataResponse = deps
        .querier
        .query_wasm_smart(config.price_feed, &PriceFeedQueryMsg::LatestRoundData {})?;
    Ok(round.answer)
}
