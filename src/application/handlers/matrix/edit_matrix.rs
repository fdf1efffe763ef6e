//! EditMatrixHandler - Applies one workspace edit and re-evaluates.
//!
//! The edited workspace and its evaluation are returned together, so a caller
//! never holds results computed from an older version of the matrix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::matrix::{MatrixEdit, MatrixWorkspace};

use super::evaluate_matrix::{build_workspace, evaluate_workspace, resolve_rule, MatrixEvaluation};
use super::RuleDefaults;

/// Command to edit a workspace.
///
/// The workspace arrives as raw parts and is validated by the handler.
#[derive(Debug, Clone)]
pub struct EditMatrixCommand {
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
    pub edit: MatrixEdit,
    pub rule: String,
    pub lambda: Option<f64>,
}

/// A workspace together with its current evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub workspace: MatrixWorkspace,
    pub evaluation: MatrixEvaluation,
}

/// Handler for workspace edits.
pub struct EditMatrixHandler {
    defaults: RuleDefaults,
}

impl EditMatrixHandler {
    pub fn new(defaults: RuleDefaults) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: EditMatrixCommand) -> Result<WorkspaceSnapshot, DomainError> {
        let rule = resolve_rule(&cmd.rule, cmd.lambda, &self.defaults)?;

        let mut workspace = build_workspace(cmd.alternatives, cmd.states, &cmd.payoffs)?;
        debug!(edit = ?cmd.edit, "Applying matrix edit");
        workspace.apply(cmd.edit)?;

        let evaluation = evaluate_workspace(&workspace, &rule)?;
        Ok(WorkspaceSnapshot {
            workspace,
            evaluation,
        })
    }
}
