use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw_storage_plus::Item;
use lottery_interface::mocks::{
    PriceFeedExecuteMsg, PriceFeedInstantiateMsg, PriceFeedQueryMsg, RoundDataResponse,
};

const LATEST_ROUND: Item<RoundDataResponse> = Item::new("latest_round");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: PriceFeedInstantiateMsg,
) -> StdResult<Response> {
    LATEST_ROUND.save(
        deps.storage,
        &RoundDataResponse {
            round_id: 1,
            answer: msg.initial_answer,
            decimals: msg.decimals,
        },
    )?;
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: PriceFeedExecuteMsg,
) -> StdResult<Response> {
    match msg {
        PriceFeedExecuteMsg::UpdateAnswer { answer } => {
            LATEST_ROUND.update(deps.storage, |round| -> StdResult<_> {
                Ok(RoundDataResponse {
                    round_id: round.round_id + 1,
                    answer,
                    decimals: round.decimals,
                })
            })?;
            Ok(Response::new().add_attribute("action", "update_answer"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: PriceFeedQueryMsg) -> StdResult<Binary> {
    match msg {
        PriceFeedQueryMsg::LatestRoundData {} => to_json_binary(&LATEST_ROUND.load(deps.storage)?),
    }
}
