//! Checker integration tests
//!
//! Each check is exercised through `PermissionChecker::check_permissions`,
//! starting from a token payload.

#[cfg(test)]
mod tests {
    use crate::common::TokenFactory;
    use permission_checker::*;

    // ==================== Protected default branch ====================

    #[test]
    fn test_authorization_rule_table_on_protected_projects() {
        let checker = PermissionChecker::default();

        for role in Role::ALL {
            let token = TokenFactory::protected(role);
            let on_default = checker
                .check_permissions(&token, &CanModifyAuthorization::on_branch(BranchType::Default))
                .is_ok();
            let unspecified = checker
                .check_permissions(&token, &CanModifyAuthorization::new(None))
                .is_ok();
            let on_dev = checker
                .check_permissions(&token, &CanModifyAuthorization::on_branch(BranchType::Dev))
                .is_ok();

            assert_eq!(on_default, role == Role::ProductionManager, "{}", role);
            assert_eq!(unspecified, role == Role::ProductionManager, "{}", role);
            assert_eq!(
                on_dev,
                matches!(role, Role::Developer | Role::Reviewer),
                "{}",
                role
            );
        }
    }

    #[test]
    fn test_admin_cannot_modify_sessions_on_protected_project() {
        let checker = PermissionChecker::default();
        let error = checker
            .check_permissions(&TokenFactory::protected(Role::Admin), &CanModifySessions)
            .unwrap_err();

        assert!(error.message().contains("protected branch projects"));
        assert_eq!(error.code(), Some(DenialCode::RoleDenied));
    }

    #[test]
    fn test_subscriptions_only_for_production_manager_on_default_branch() {
        let checker = PermissionChecker::default();
        let manager = TokenFactory::protected(Role::ProductionManager);

        assert!(
            checker
                .check_permissions(&manager, &CanModifySubscriptions::new(BranchType::Default))
                .is_ok()
        );
        assert!(
            checker
                .check_permissions(&manager, &CanModifySubscriptions::new(BranchType::Dev))
                .is_err()
        );
        assert!(
            checker
                .check_permissions(
                    &TokenFactory::protected(Role::Admin),
                    &CanModifySubscriptions::new(BranchType::Default)
                )
                .is_err()
        );
    }

    // ==================== Regular projects ====================

    #[test]
    fn test_read_only_token_on_regular_project() {
        let checker = PermissionChecker::default();
        let token = TokenFactory::with_role(Role::ReadOnly);

        assert!(checker.check_permissions(&token, &CanModifySessions).is_err());
        assert!(
            checker
                .check_permissions(&token, &CanModifySubscriptions::new(BranchType::Dev))
                .is_err()
        );
        assert!(
            checker
                .check_permissions(&token, &CanModifyAuthorization::default())
                .is_err()
        );
        assert!(checker.check_permissions(&token, &CanViewSchedules).is_ok());
    }

    #[test]
    fn test_guest_on_regular_project() {
        let checker = PermissionChecker::default();
        let token = TokenFactory::with_role(Role::Guest);

        assert!(checker.check_permissions(&token, &CanModifySessions).is_ok());
        assert!(
            checker
                .check_permissions(&token, &CanModifyAuthorization::default())
                .is_ok()
        );
        assert_eq!(
            checker
                .check_permissions(&token, &CanModifySubscriptions::new(BranchType::Default))
                .unwrap_err()
                .to_string(),
            "Role \"guest\" is not allowed to modify subscriptions"
        );
    }

    // ==================== Components and projects ====================

    #[test]
    fn test_shared_code_missing_from_allow_list() {
        let checker = PermissionChecker::default();
        let token = TokenFactory::with_components(Role::Admin, &["keboola.variables"]);

        let error = checker
            .check_permissions(&token, &CanResolveSharedCodeAndVariables)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "You do not have permission to read configurations of \"keboola.shared-code\" component"
        );
    }

    #[test]
    fn test_manage_app_across_projects() {
        let checker = PermissionChecker::default();
        let check = CanManageApp::new("1", "456");

        let error = checker
            .check_permissions(&TokenFactory::in_project(Role::Admin, "123"), &check)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Token is not authorized to manage app '1', app is from different project"
        );
        assert!(
            checker
                .check_permissions(&TokenFactory::in_project(Role::Admin, "456"), &check)
                .is_ok()
        );
    }

    #[test]
    fn test_schedules() {
        let checker = PermissionChecker::default();

        for role in Role::ALL {
            let token = TokenFactory::with_role(role);
            assert_eq!(
                checker.check_permissions(&token, &CanModifySchedules).is_ok(),
                matches!(role, Role::Admin | Role::Share)
            );
        }

        let anonymous = TokenFactory::anonymous();
        assert_eq!(
            checker
                .check_permissions(&anonymous, &CanModifySchedules)
                .unwrap_err()
                .to_string(),
            "Role \"none\" is insufficient for this operation."
        );
        assert!(checker.check_permissions(&anonymous, &CanViewSchedules).is_ok());
    }

    // ==================== Payloads ====================

    #[test]
    fn test_json_payload_with_unknown_role_fails_closed() {
        let checker = PermissionChecker::default();
        let token = RawToken::from_json(r#"{"role": "owner", "projectId": 1}"#).unwrap();

        assert_eq!(checker.adapt(&token).role(), Role::None);
        assert!(
            checker
                .check_permissions(&token, &CanModifyAuthorization::default())
                .is_err()
        );
        assert!(checker.check_permissions(&token, &CanModifySchedules).is_err());
    }

    #[test]
    fn test_checks_shared_across_threads() {
        let checker = std::sync::Arc::new(PermissionChecker::default());
        let check = std::sync::Arc::new(CanModifyAuthorization::on_branch(BranchType::Dev));

        let handles: Vec<_> = Role::ALL
            .into_iter()
            .map(|role| {
                let checker = checker.clone();
                let check = check.clone();
                std::thread::spawn(move || {
                    let token = TokenFactory::protected(role);
                    (role, checker.check_permissions(&token, &*check).is_ok())
                })
            })
            .collect();

        for handle in handles {
            let (role, allowed) = handle.join().unwrap();
            assert_eq!(allowed, matches!(role, Role::Developer | Role::Reviewer));
        }
    }
}
