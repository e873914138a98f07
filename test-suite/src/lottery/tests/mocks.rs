#[cfg(test)]
mod tests {
    use cosmwasm_std::Uint128;
    use cw_orch::prelude::*;
    use lottery_interface::mocks::{PriceFeedQueryMsgFns, VrfCoordinatorQueryMsgFns};
    use scripts::{
        contracts::{ContractInterface, ContractKind},
        error::{ChainError, ScriptError},
        interfaces::VrfCoordinator,
        mocks::{deploy_mocks, fund_subscription, MockParams, DEFAULT_FUNDING_AMOUNT},
    };

    use crate::common_setup::setup_config::{mock_session, DEV_NETWORK};

    #[test]
    fn test_deploy_mocks_is_not_idempotent() {
        let mut session = mock_session(DEV_NETWORK);

        let (first_feed, _) = deploy_mocks(&mut session, MockParams::default()).unwrap();
        let (second_feed, second_coordinator) = deploy_mocks(
            &mut session,
            MockParams {
                decimals: 18,
                initial_value: 3_000,
            },
        )
        .unwrap();

        assert_eq!(session.registry.count(ContractKind::MockPriceFeed), 2);
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 2);
        assert_ne!(first_feed.address().unwrap(), second_feed.address().unwrap());
        assert_eq!(
            session.registry.latest(ContractKind::MockPriceFeed),
            Some(second_feed.address().unwrap())
        );
        assert_eq!(
            session.registry.latest(ContractKind::MockVrfCoordinator),
            Some(second_coordinator.address().unwrap())
        );

        let round = second_feed.latest_round_data().unwrap();
        assert_eq!(round.decimals, 18);
        assert_eq!(round.answer, Uint128::new(3_000));
        assert_eq!(
            first_feed.latest_round_data().unwrap().answer,
            Uint128::new(200_000_000_000)
        );
    }

    #[test]
    fn test_fund_subscription_without_coordinator() {
        let mut session = mock_session(DEV_NETWORK);

        let err = fund_subscription(&mut session, 150, DEFAULT_FUNDING_AMOUNT).unwrap_err();
        assert_eq!(
            err,
            ScriptError::Chain(ChainError::NoDeployment(ContractKind::MockVrfCoordinator))
        );
        assert_eq!(session.registry.count(ContractKind::MockVrfCoordinator), 0);
    }

    #[test]
    fn test_fund_subscription_on_latest_coordinator() {
        let mut session = mock_session(DEV_NETWORK);
        let (_, earlier) = deploy_mocks(&mut session, MockParams::default()).unwrap();
        let (_, latest) = deploy_mocks(&mut session, MockParams::default()).unwrap();

        let tx = fund_subscription(&mut session, 150, DEFAULT_FUNDING_AMOUNT).unwrap();
        session.wait(&tx).unwrap();
        assert!(tx.height <= session.chain.block_info().unwrap().height);

        assert_eq!(
            latest.get_subscription(150).unwrap().balance,
            Uint128::new(DEFAULT_FUNDING_AMOUNT)
        );
        assert_eq!(earlier.get_subscription(150).unwrap().balance, Uint128::zero());

        // Funding again adds to the balance
        fund_subscription(&mut session, 150, 5).unwrap();
        let coordinator = VrfCoordinator::at(
            session.chain.clone(),
            &session
                .registry
                .latest(ContractKind::MockVrfCoordinator)
                .unwrap(),
        );
        assert_eq!(
            coordinator.get_subscription(150).unwrap().balance,
            Uint128::new(DEFAULT_FUNDING_AMOUNT + 5)
        );
    }
}
