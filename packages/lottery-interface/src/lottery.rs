use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Subscription the lottery requests its randomness from.
pub const DEFAULT_SUBSCRIPTION_ID: u64 = 3438;

#[cw_serde]
pub struct InstantiateMsg {
    pub price_feed: String,
    pub subscription_id: u64,
}

#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    StartLottery {},
    #[payable]
    Enter {},
    // Closes the round and requests randomness from the coordinator
    EndLottery {},
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    #[returns(Uint128)]
    EntranceFee {},
    #[returns(Option<Addr>)]
    RecentWinner {},
}
