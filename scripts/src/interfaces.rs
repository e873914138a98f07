//! cw-orch interfaces of the lottery and of the contracts it depends on.
//!
//! Each interface is identified in the cw-orch state by its contract id, under which the code id
//! to instantiate and the address of the last instantiation are kept. Interfaces bound to a known
//! address carry it themselves.

use cw_orch::{contract::Contract, environment::ChainState, prelude::*};
use lottery_interface::{
    lottery::{ExecuteMsg, InstantiateMsg, QueryMsg},
    mocks::{
        PriceFeedExecuteMsg, PriceFeedInstantiateMsg, PriceFeedQueryMsg, VrfCoordinatorExecuteMsg,
        VrfCoordinatorInstantiateMsg, VrfCoordinatorQueryMsg,
    },
};

use crate::contracts::{ContractInterface, ContractKind};

macro_rules! contract_interface {
    ($name:ident, $kind:expr, $init:ty, $exec:ty, $query:ty) => {
        #[derive(Clone)]
        pub struct $name<Chain>(Contract<Chain>);

        impl<Chain> $name<Chain> {
            pub fn new(chain: Chain) -> Self {
                Self(Contract::new($kind.contract_id(), chain))
            }
        }

        impl<Chain: ChainState> ContractInstance<Chain> for $name<Chain> {
            fn as_instance(&self) -> &Contract<Chain> {
                &self.0
            }

            fn as_instance_mut(&mut self) -> &mut Contract<Chain> {
                &mut self.0
            }
        }

        impl<Chain> InstantiableContract for $name<Chain> {
            type InstantiateMsg = $init;
        }

        impl<Chain> ExecutableContract for $name<Chain> {
            type ExecuteMsg = $exec;
        }

        impl<Chain> QueryableContract for $name<Chain> {
            type QueryMsg = $query;
        }

        impl<Chain: CwEnv> ContractInterface<Chain> for $name<Chain> {
            const KIND: ContractKind = $kind;

            fn load(chain: Chain) -> Self {
                Self::new(chain)
            }

            fn at(chain: Chain, address: &Addr) -> Self {
                // An id of its own keeps the address out of the shared state
                let mut contract =
                    Contract::new(format!("{}@{address}", $kind.contract_id()), chain);
                contract.set_default_address(address);
                Self(contract)
            }
        }
    };
}

contract_interface!(
    PriceFeed,
    ContractKind::MockPriceFeed,
    PriceFeedInstantiateMsg,
    PriceFeedExecuteMsg,
    PriceFeedQueryMsg
);

contract_interface!(
    VrfCoordinator,
    ContractKind::MockVrfCoordinator,
    VrfCoordinatorInstantiateMsg,
    VrfCoordinatorExecuteMsg,
    VrfCoordinatorQueryMsg
);

contract_interface!(
    Lottery,
    ContractKind::Lottery,
    InstantiateMsg,
    ExecuteMsg,
    QueryMsg
);
