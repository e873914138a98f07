use cosmwasm_std::{
    Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult,
};
use cw_orch::prelude::{ContractWrapper, MockContract};

pub fn contract_price_feed() -> Box<dyn MockContract<Empty>> {
    let contract = ContractWrapper::new(
        super::price_feed::execute,
        super::price_feed::instantiate,
        super::price_feed::query,
    );
    Box::new(contract)
}

pub fn contract_vrf_coordinator() -> Box<dyn MockContract<Empty>> {
    let contract = ContractWrapper::new(
        super::vrf_coordinator::execute,
        super::vrf_coordinator::instantiate,
        super::vrf_coordinator::query,
    );
    Box::new(contract)
}

pub fn contract_lottery() -> Box<dyn MockContract<Empty>> {
    let contract = ContractWrapper::new(
        super::lottery_contract::execute,
        super::lottery_contract::instantiate,
        super::lottery_contract::query,
    );
    Box::new(contract)
}

fn reject(_deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
    Err(StdError::generic_err("rejected by the test chain"))
}

fn reject_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    Err(StdError::generic_err("rejected by the test chain"))
}

/// Code whose instantiation always fails
pub fn contract_rejecting() -> Box<dyn MockContract<Empty>> {
    Box::new(ContractWrapper::new(reject, reject, reject_query))
}
