//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::TokenFactory;
    use permission_checker::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "token:\n  unknown_features: ignore\n  known_features: [protected-default-branch]\nlogging:\n  level: warn"
        )
        .unwrap();

        let config = CheckerConfig::from_file(file.path()).unwrap();

        assert_eq!(config.token.unknown_features, FeaturePolicy::Ignore);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CheckerConfig::from_file(dir.path().join("missing.yaml"));

        assert!(matches!(result, Err(CheckerError::Config(msg)) if msg.contains("Failed to read")));
    }

    #[test]
    fn test_configured_checker_drops_unknown_features() {
        let config = CheckerConfig::from_yaml_str(
            "token:\n  unknown_features: ignore\n  known_features: [protected-default-branch]\n",
        )
        .unwrap();
        let checker = PermissionChecker::new(&config);

        let mut token = TokenFactory::protected(Role::Developer);
        token.features.push("experimental".to_string());

        let adapted = checker.adapt(&token);
        assert!(adapted.has_feature(Feature::PROTECTED_DEFAULT_BRANCH));
        assert!(!adapted.has_feature("experimental"));
        assert_eq!(adapted.features().len(), 1);
    }
}
