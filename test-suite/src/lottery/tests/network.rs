#[cfg(test)]
mod tests {
    use scripts::network::{NetworkClass, NetworkEnvs};

    #[test]
    fn test_classify_default_envs() {
        let envs = NetworkEnvs::default();
        assert_eq!(envs.classify("development"), NetworkClass::Development);
        assert_eq!(envs.classify("local-stargaze"), NetworkClass::Development);
        assert_eq!(envs.classify("stargaze-fork-dev"), NetworkClass::ForkedLocal);
        assert_eq!(envs.classify("stargaze-1"), NetworkClass::Production);
        assert_eq!(envs.classify(""), NetworkClass::Production);
    }

    #[test]
    fn test_classify_name_in_both_sets() {
        let envs = NetworkEnvs::new(["shared", "dev"], ["shared", "fork"]);
        assert_eq!(envs.classify("shared"), NetworkClass::Development);
        assert_eq!(envs.classify("fork"), NetworkClass::ForkedLocal);
    }

    #[test]
    fn test_classify_empty_sets() {
        let envs = NetworkEnvs::new(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(envs.classify("development"), NetworkClass::Production);
        assert!(!envs.classify("development").has_local_accounts());
    }

    #[test]
    fn test_local_accounts_by_class() {
        assert!(NetworkClass::Development.has_local_accounts());
        assert!(NetworkClass::ForkedLocal.has_local_accounts());
        assert!(!NetworkClass::Production.has_local_accounts());
    }
}
