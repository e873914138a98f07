use cosmwasm_std::coins;
use cw_orch::prelude::Mock;
use scripts::contracts::ContractKind;

use super::contract_boxes::{
    contract_lottery, contract_price_feed, contract_rejecting, contract_vrf_coordinator,
};

pub const DENOM: &str = "ustars";
pub const STARTING_BALANCE: u128 = 1_000_000_000_000_000;

/// Every account the test credentials can resolve to
pub const ACCOUNT_LABELS: [&str; 5] = ["local-0", "local-1", "local-2", "alice", "from-key"];

/// Mock chain with the lottery and both mocks uploaded and every test account funded
pub fn mock_chain() -> Mock {
    let chain = Mock::new("admin");
    chain
        .upload_custom(ContractKind::MockPriceFeed.contract_id(), contract_price_feed())
        .unwrap();
    chain
        .upload_custom(
            ContractKind::MockVrfCoordinator.contract_id(),
            contract_vrf_coordinator(),
        )
        .unwrap();
    chain
        .upload_custom(ContractKind::Lottery.contract_id(), contract_lottery())
        .unwrap();

    for label in ACCOUNT_LABELS {
        chain
            .set_balance(label, coins(STARTING_BALANCE, DENOM))
            .unwrap();
    }
    chain
}

/// Replaces the code of `kind` with code that cannot be instantiated
pub fn reject_deploys_of(chain: &Mock, kind: ContractKind) {
    chain
        .upload_custom(kind.contract_id(), contract_rejecting())
        .unwrap();
}
