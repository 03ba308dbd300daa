use super::PermissionCheck;
use crate::auth::token::Token;
use crate::core::models::ComponentId;
use crate::utils::error::{CheckResult, DenialCode, PermissionDenied};

/// May the token read variables and shared code configurations.
///
/// Variables are checked first, so a token lacking both is told about
/// `keboola.variables`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanResolveSharedCodeAndVariables;

impl CanResolveSharedCodeAndVariables {
    const COMPONENTS: [&'static str; 2] = [ComponentId::VARIABLES, ComponentId::SHARED_CODE];
}

impl PermissionCheck for CanResolveSharedCodeAndVariables {
    fn name(&self) -> &'static str {
        "resolve_shared_code_and_variables"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        for component_id in Self::COMPONENTS {
            if !token.is_component_allowed(component_id) {
                return Err(PermissionDenied::new(format!(
                    "You do not have permission to read configurations of \"{}\" component",
                    component_id
                ))
                .with_code(DenialCode::MissingComponent));
            }
        }

        Ok(())
    }
}

/// May the token run a given component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanRunComponent {
    component_id: ComponentId,
}

impl CanRunComponent {
    pub fn new<C: Into<ComponentId>>(component_id: C) -> Self {
        Self {
            component_id: component_id.into(),
        }
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }
}

impl PermissionCheck for CanRunComponent {
    fn name(&self) -> &'static str {
        "run_component"
    }

    fn evaluate(&self, token: &Token) -> CheckResult {
        if token.is_component_allowed(self.component_id.as_str()) {
            Ok(())
        } else {
            Err(PermissionDenied::missing_component(&self.component_id))
        }
    }
}
