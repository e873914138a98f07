//! Messages of the contracts standing in for the price feed and the randomness coordinator on
//! development networks.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

pub const DECIMALS: u8 = 8;
pub const INITIAL_VALUE: u128 = 200_000_000_000;
pub const BASE_FEE: u128 = 150;
pub const GAS_PRICE_LINK: u128 = 150;

#[cw_serde]
pub struct PriceFeedInstantiateMsg {
    pub decimals: u8,
    pub initial_answer: Uint128,
}

#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum PriceFeedExecuteMsg {
    UpdateAnswer { answer: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum PriceFeedQueryMsg {
    #[returns(RoundDataResponse)]
    LatestRoundData {},
}

#[cw_serde]
pub struct RoundDataResponse {
    pub round_id: u64,
    pub answer: Uint128,
    pub decimals: u8,
}

#[cw_serde]
pub struct VrfCoordinatorInstantiateMsg {
    pub base_fee: Uint128,
    pub gas_price_link: Uint128,
}

#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum VrfCoordinatorExecuteMsg {
    FundSubscription { sub_id: u64, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum VrfCoordinatorQueryMsg {
    #[returns(SubscriptionResponse)]
    GetSubscription { sub_id: u64 },
}

#[cw_serde]
pub struct SubscriptionResponse {
    pub balance: Uint128,
}
