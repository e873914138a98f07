#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use cosmwasm_std::{Addr, Uint128};
    use cw_orch::{environment::ChainState, prelude::*};
    use lottery_interface::mocks::PriceFeedQueryMsgFns;
    use scripts::{
        contracts::{register_code_ids, resolve_contract, ContractKind, ContractName, Dependency},
        error::{ChainError, ConfigError, ScriptError},
    };

    use crate::common_setup::{
        app::{mock_chain, reject_deploys_of},
        setup_config::{
            mock_session, mock_session_with, test_config, DEV_NETWORK, FORK_NETWORK,
            FORK_PRICE_FEED, MAINNET, TESTNET, TESTNET_PRICE_FEED, TESTNET_VRF_COORDINATOR,
        },
    };

    #[test]
    fn test_contract_names() {
        assert_eq!(
            ContractName::from_str("eth_usd_price_feed").unwrap(),
            ContractName::EthUsdPriceFeed
        );
        assert_eq!(
            ContractName::from_str("vrf_coordinator").unwrap(),
            ContractName::VrfCoordinator
        );
        assert_eq!(
            ContractName::EthUsdPriceFeed.mock_kind(),
            ContractKind::MockPriceFeed
        );
        assert_eq!(
            ContractName::VrfCoordinator.mock_kind(),
            ContractKind::MockVrfCoordinator
        );
    }

    #[test]
    fn test_contract_ids_are_distinct() {
        assert_eq!(ContractKind::MockPriceFeed.contract_id(), "price_feed");
        assert_eq!(ContractKind::MockVrfCoordinator.contract_id(), "vrf_coordinator");
        assert_eq!(ContractKind::Lottery.contract_id(), "lottery");
    }

    #[test]
    fn test_register_code_ids() {
        let chain = Mock::new("admin");
        register_code_ids(
            &chain,
            &[(ContractKind::Lottery, 4012), (ContractKind::MockPriceFeed, 7)]
                .into_iter()
                .collect(),
        );

        let state = chain.state();
        assert_eq!(state.get_code_id("lottery").unwrap(), 4012);
        assert_eq!(state.get_code_id("price_feed").unwrap(), 7);
        assert!(state.get_code_id("vrf_coordinator").is_err());
    }

    #[test]
    fn test_unknown_name_is_rejected_before_any_deployment() {
        let session = mock_session(DEV_NETWORK);
        let err = "btc_usd_price_feed".parse::<ContractName>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownContract("btc_usd_price_feed".to_string())
        );
        for kind in ContractKind::ALL {
            assert_eq!(session.registry.count(kind), 0);
        }
    }

    #[test]
    fn test_dev_network_deploys_mocks_on_first_resolution() {
        let mut session = mock_session(DEV_NETWORK);

        let price_feed = resolve_contract(&mut session, ContractName::EthUsdPriceFeed).unwrap();

        assert_eq!(session.registry.count(ContractKind::MockPriceFeed), 1);
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 1);
        assert_eq!(session.registry.count(ContractKind::Lottery), 0);

        assert_eq!(price_feed.name(), ContractName::EthUsdPriceFeed);
        assert_eq!(
            Some(price_feed.address().unwrap()),
            session.registry.latest(ContractKind::MockPriceFeed)
        );

        let Dependency::PriceFeed(feed) = price_feed else {
            panic!("price feed resolved to another contract");
        };
        let round = feed.latest_round_data().unwrap();
        assert_eq!(round.answer, Uint128::new(200_000_000_000));
        assert_eq!(round.decimals, 8);

        let contract_info = session
            .chain
            .wasm_querier()
            .contract_info(&feed.address().unwrap())
            .unwrap();
        assert_eq!(contract_info.creator, "local-0");
    }

    #[test]
    fn test_dev_resolution_reuses_latest_deployment() {
        let mut session = mock_session(DEV_NETWORK);

        let first = resolve_contract(&mut session, ContractName::EthUsdPriceFeed).unwrap();
        let second = resolve_contract(&mut session, ContractName::EthUsdPriceFeed).unwrap();
        assert_eq!(first.address().unwrap(), second.address().unwrap());

        // The coordinator came with the first batch of mocks
        let coordinator = resolve_contract(&mut session, ContractName::VrfCoordinator).unwrap();
        assert_eq!(coordinator.name(), ContractName::VrfCoordinator);
        assert_eq!(
            Some(coordinator.address().unwrap()),
            session.registry.latest(ContractKind::MockVrfCoordinator)
        );
        assert_eq!(session.registry.count(ContractKind::MockPriceFeed), 1);
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 1);
    }

    #[test]
    fn test_production_binds_configured_address() {
        let mut session = mock_session(TESTNET);

        let price_feed = resolve_contract(&mut session, ContractName::EthUsdPriceFeed).unwrap();
        assert_eq!(price_feed.name(), ContractName::EthUsdPriceFeed);
        assert_eq!(
            price_feed.address().unwrap(),
            Addr::unchecked(TESTNET_PRICE_FEED)
        );
        let coordinator = resolve_contract(&mut session, ContractName::VrfCoordinator).unwrap();
        assert_eq!(
            coordinator.address().unwrap(),
            Addr::unchecked(TESTNET_VRF_COORDINATOR)
        );

        for kind in ContractKind::ALL {
            assert_eq!(session.registry.count(kind), 0);
        }
    }

    #[test]
    fn test_forked_local_binds_configured_address() {
        let mut session = mock_session(FORK_NETWORK);

        let price_feed = resolve_contract(&mut session, ContractName::EthUsdPriceFeed).unwrap();
        assert_eq!(price_feed.address().unwrap(), Addr::unchecked(FORK_PRICE_FEED));
        assert_eq!(session.registry.count(ContractKind::MockPriceFeed), 0);
    }

    #[test]
    fn test_production_without_address_is_a_config_error() {
        let mut session = mock_session(MAINNET);

        let err = resolve_contract(&mut session, ContractName::EthUsdPriceFeed)
            .map(|_| ())
            .unwrap_err();
        assert_eq!(
            err,
            ScriptError::Config(ConfigError::MissingAddress {
                network: MAINNET.to_string(),
                contract: "eth_usd_price_feed".to_string(),
            })
        );

        // Networks missing from the configuration entirely fail the same way
        let mut session = mock_session("some-other-net");
        let err = resolve_contract(&mut session, ContractName::VrfCoordinator)
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Config(ConfigError::MissingAddress { .. })
        ));
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 0);
    }

    #[test]
    fn test_failed_mock_deployment_leaves_registry_unchanged() {
        let chain = mock_chain();
        reject_deploys_of(&chain, ContractKind::MockPriceFeed);
        let mut session = mock_session_with(DEV_NETWORK, test_config(), chain);

        let err = resolve_contract(&mut session, ContractName::EthUsdPriceFeed)
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, ScriptError::Chain(ChainError::Rejected(_))));
        assert_eq!(session.registry.count(ContractKind::MockPriceFeed), 0);
        assert_eq!(session.registry.latest(ContractKind::MockPriceFeed), None);
        // The coordinator is deployed after the feed, so it never was
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 0);
    }
}
