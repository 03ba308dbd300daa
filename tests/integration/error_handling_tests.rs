//! Error handling integration tests
//!
//! Denials flow into the crate error type unchanged, so callers using `?`
//! render the same message the check produced.

#[cfg(test)]
mod tests {
    use crate::common::TokenFactory;
    use permission_checker::*;

    fn guarded_action(token: &RawToken) -> Result<&'static str> {
        PermissionChecker::default().check_permissions(token, &CanModifySchedules)?;
        Ok("scheduled")
    }

    #[test]
    fn test_denial_propagates_with_question_mark() {
        let error = guarded_action(&TokenFactory::with_role(Role::Developer)).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Role \"developer\" is insufficient for this operation."
        );
        assert_eq!(
            error.as_denial().and_then(PermissionDenied::code),
            Some(DenialCode::InsufficientRole)
        );
    }

    #[test]
    fn test_allowed_action_runs() {
        assert_eq!(
            guarded_action(&TokenFactory::with_role(Role::Share)).unwrap(),
            "scheduled"
        );
    }

    #[test]
    fn test_malformed_payload_is_serialization_error() {
        let result = RawToken::from_json("{\"projectId\": [1]}");
        assert!(matches!(result, Err(CheckerError::Serialization(_))));
    }
}
