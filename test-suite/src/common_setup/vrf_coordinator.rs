use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw_storage_plus::{Item, Map};
use lottery_interface::mocks::{
    SubscriptionResponse, VrfCoordinatorExecuteMsg, VrfCoordinatorInstantiateMsg,
    VrfCoordinatorQueryMsg,
};

const FEES: Item<VrfCoordinatorInstantiateMsg> = Item::new("fees");
const SUBSCRIPTIONS: Map<u64, Uint128> = Map::new("subscriptions");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: VrfCoordinatorInstantiateMsg,
) -> StdResult<Response> {
    FEES.save(deps.storage, &msg)?;
    Ok(Response::new())
}

/// Subscriptions are opened by their first funding
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: VrfCoordinatorExecuteMsg,
) -> StdResult<Response> {
    match msg {
        VrfCoordinatorExecuteMsg::FundSubscription { sub_id, amount } => {
            SUBSCRIPTIONS.update(deps.storage, sub_id, |balance| -> StdResult<_> {
                Ok(balance.unwrap_or_default().checked_add(amount)?)
            })?;
            Ok(Response::new()
                .add_attribute("action", "fund_subscription")
                .add_attribute("sub_id", sub_id.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: VrfCoordinatorQueryMsg) -> StdResult<Binary> {
    match msg {
        VrfCoordinatorQueryMsg::GetSubscription { sub_id } => {
            let balance = SUBSCRIPTIONS
                .may_load(deps.storage, sub_id)?
                .unwrap_or_default();
            to_json_binary(&SubscriptionResponse { balance })
        }
    }
}
