//! DefaultWorkspaceHandler - Query handler for the starting exercise.

use crate::domain::analysis::DecisionRule;
use crate::domain::foundation::DomainError;
use crate::domain::matrix::MatrixWorkspace;

use super::edit_matrix::WorkspaceSnapshot;
use super::evaluate_matrix::evaluate_workspace;
use super::RuleDefaults;

/// Handler returning the default workspace, evaluated with the default rule.
pub struct DefaultWorkspaceHandler {
    defaults: RuleDefaults,
}

impl DefaultWorkspaceHandler {
    pub fn new(defaults: RuleDefaults) -> Self {
        Self { defaults }
    }

    pub fn handle(&self) -> Result<WorkspaceSnapshot, DomainError> {
        let rule = DecisionRule::from_kind(self.defaults.rule, Some(self.defaults.lambda.value()))?;
        let workspace = MatrixWorkspace::default();
        let evaluation = evaluate_workspace(&workspace, &rule)?;

        Ok(WorkspaceSnapshot {
            workspace,
            evaluation,
        })
    }
}
