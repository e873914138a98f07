#[cfg(test)]
mod tests {
    use std::fs;

    use cosmwasm_std::Addr;
    use cw_orch::prelude::*;
    use scripts::{
        contracts::ContractKind, interfaces::Lottery, lottery::deploy_lottery,
        registry::DeploymentRegistry,
    };

    use crate::common_setup::{
        app::mock_chain,
        helpers::temp_dir,
        setup_config::{persistent_session, persistent_session_on, DEV_NETWORK, TESTNET},
    };

    #[test]
    fn test_latest_is_last_recorded() {
        let mut registry = DeploymentRegistry::default();
        assert_eq!(registry.latest(ContractKind::Lottery), None);
        assert_eq!(registry.count(ContractKind::Lottery), 0);

        for address in ["first", "second"] {
            registry.record(ContractKind::Lottery, Addr::unchecked(address));
        }

        assert_eq!(registry.count(ContractKind::Lottery), 2);
        assert_eq!(registry.count(ContractKind::MockPriceFeed), 0);
        assert_eq!(
            registry.latest(ContractKind::Lottery),
            Some(Addr::unchecked("second"))
        );
    }

    #[test]
    fn test_registry_save_and_load() {
        let dir = temp_dir("registry-file");
        let path = dir.join("nested").join("net.json");
        assert_eq!(
            DeploymentRegistry::load(&path).unwrap(),
            DeploymentRegistry::default()
        );

        let mut registry = DeploymentRegistry::default();
        registry.record(
            ContractKind::MockVrfCoordinator,
            Addr::unchecked("coordinator"),
        );
        registry.save(&path).unwrap();

        assert_eq!(DeploymentRegistry::load(&path).unwrap(), registry);
    }

    #[test]
    fn test_testnet_deployments_survive_the_session() {
        let dir = temp_dir("registry-testnet");
        let chain = mock_chain();

        let mut session = persistent_session_on(TESTNET, &dir, chain.clone());
        let lottery = deploy_lottery(&mut session).unwrap();
        assert!(dir.join(format!("{TESTNET}.json")).exists());

        // A later run finds the lottery without deploying anything
        let mut session = persistent_session_on(TESTNET, &dir, chain);
        assert_eq!(session.registry.count(ContractKind::Lottery), 1);
        let account = session.default_account().unwrap();
        let found: Lottery<Mock> = session.latest(&account).unwrap();
        assert_eq!(found.address().unwrap(), lottery.address().unwrap());
    }

    #[test]
    fn test_development_deployments_are_not_saved() {
        let dir = temp_dir("registry-dev");

        let mut session = persistent_session(DEV_NETWORK, &dir);
        deploy_lottery(&mut session).unwrap();
        assert_eq!(session.registry.count(ContractKind::Lottery), 1);
        assert!(!dir.join(format!("{DEV_NETWORK}.json")).exists());

        let session = persistent_session(DEV_NETWORK, &dir);
        assert_eq!(session.registry.count(ContractKind::Lottery), 0);
    }

    #[test]
    fn test_unwritable_registry_does_not_fail_the_deployment() {
        let dir = temp_dir("registry-unwritable");
        let blocker = dir.join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let deployments_dir = blocker.join("deployments");

        let mut session = persistent_session(TESTNET, &deployments_dir);
        let lottery = deploy_lottery(&mut session).unwrap();

        assert_eq!(
            session.registry.latest(ContractKind::Lottery),
            Some(lottery.address().unwrap())
        );
        assert!(!deployments_dir.exists());
    }
}
